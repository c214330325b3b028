//! # kvsnet client core
//!
//! Filtered secure-connection establishment for streaming clients that must
//! reach region-specific endpoints over IPv4, IPv6 or both.
//!
//! ## Features
//!
//! - **IP version filtering** of resolved addresses (`IPV4`, `IPV6`,
//!   `IPV4_AND_IPV6`)
//! - **System resolver** through a pluggable [`Resolve`] seam
//! - **TLS 1.2** via rustls with a pluggable [`TrustManager`]
//! - **Typed errors** that keep the underlying cause
//!
//! ## Usage
//!
//! ```no_run
//! use std::io::Write;
//!
//! use kvsnet_client::{ConnectionFactory, IpVersionFilter};
//!
//! let factory = ConnectionFactory::new();
//! let mut socket = factory
//!     .connect_filtered("https://kinesisvideo.us-west-2.api.aws", IpVersionFilter::Ipv6Only)?;
//! socket.write_all(b"GET / HTTP/1.1\r\nHost: kinesisvideo.us-west-2.api.aws\r\n\r\n")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod connect;
pub mod dns;
pub mod error;
pub mod filter;
pub mod tls;

pub use config::SocketConfig;
pub use connect::{ConnectionFactory, ConnectionTarget, Scheme, Socket, TlsInfo};
pub use dns::{FilteredResolver, GaiResolver, Resolve, ResolveError, ResolvedAddress, ResolvedAddrs};
pub use error::{ConnectionError, Error, Kind, Result};
pub use filter::{IpVersionFilter, ParseFilterError};
pub use tls::{TlsError, TrustManager, WebPkiTrustManager};
