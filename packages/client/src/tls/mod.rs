//! TLS trust and client configuration
//!
//! The verification algorithm is rustls/webpki's; this module only decides
//! which roots are trusted and whether the server name is checked.

use std::sync::Arc;

use rustls::crypto::CryptoProvider;

pub mod client_config;
pub mod errors;
pub mod trust_manager;
mod verifier;

pub use client_config::tls12_client_config;
pub use errors::TlsError;
pub use trust_manager::{TrustManager, WebPkiTrustManager};

pub(crate) fn crypto_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}
