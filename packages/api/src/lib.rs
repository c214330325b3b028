//! kvsnet public API
//!
//! Region-aware configuration for a streaming client plus the filtered
//! secure-connection core it uses to reach its endpoint.
//!
//! ```no_run
//! use kvsnet::{ClientConfiguration, IpVersionFilter};
//!
//! let config = ClientConfiguration::builder()
//!     .region("eu-central-1")
//!     .legacy_endpoint(false)
//!     .ip_version_filter(IpVersionFilter::Ipv6Only)
//!     .build();
//!
//! let socket = config.connect()?;
//! assert!(socket.is_secure());
//! # Ok::<(), kvsnet::ConnectionError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod endpoints;

pub use config::{ClientConfiguration, ClientConfigurationBuilder};

// Re-export the connection core
pub use kvsnet_client::{
    ConnectionError, ConnectionFactory, Error, FilteredResolver, IpVersionFilter, Kind,
    ParseFilterError, ResolveError, Result, Socket, SocketConfig, TlsError, TlsInfo, TrustManager,
    WebPkiTrustManager,
};
