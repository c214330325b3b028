//! rustls client configuration for TLS 1.2 sessions

use std::sync::Arc;

use rustls::ClientConfig;

use super::errors::TlsError;
use super::trust_manager::TrustManager;

/// Builds a TLS 1.2-only client configuration whose certificate verifier
/// comes from `trust`.
///
/// # Errors
///
/// Returns a [`TlsError`] if the trust manager cannot produce a verifier or
/// the protocol version is not supported by the crypto provider.
pub fn tls12_client_config(
    trust: &dyn TrustManager,
    verify_hostname: bool,
) -> Result<Arc<ClientConfig>, TlsError> {
    let verifier = trust.server_verifier(verify_hostname)?;

    let config = ClientConfig::builder_with_provider(super::crypto_provider())
        .with_protocol_versions(&[&rustls::version::TLS12])
        .map_err(TlsError::Config)?
        .dangerous()
        .with_custom_certificate_verifier(verifier)
        .with_no_client_auth();

    Ok(Arc::new(config))
}
