//! Pluggable certificate trust
//!
//! A [`TrustManager`] hands out the rustls verifier used for a handshake.
//! Connection establishment only decides whether hostname verification is
//! on; the chain validation itself belongs to the trust manager.

use std::fmt;
use std::sync::Arc;

use rustls::RootCertStore;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::ServerCertVerifier;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::CertificateDer;

use super::errors::TlsError;
use super::verifier::ChainOnlyVerifier;

/// Source of server certificate verifiers.
pub trait TrustManager: fmt::Debug + Send + Sync {
    /// Returns a verifier performing X.509 chain validation, and hostname
    /// verification against the TLS server name when `verify_hostname` is set.
    ///
    /// # Errors
    ///
    /// Returns a [`TlsError`] if the verifier cannot be built, for example
    /// because there are no trust anchors.
    fn server_verifier(&self, verify_hostname: bool)
    -> Result<Arc<dyn ServerCertVerifier>, TlsError>;
}

/// Trust manager validating chains with webpki against a root store.
#[derive(Clone)]
pub struct WebPkiTrustManager {
    roots: Arc<RootCertStore>,
    provider: Arc<CryptoProvider>,
}

impl WebPkiTrustManager {
    /// Trusts the platform certificate store.
    ///
    /// Falls back to the bundled webpki roots when the platform store
    /// reports load errors or yields no usable certificate.
    #[must_use]
    pub fn new() -> Self {
        let mut roots = RootCertStore::empty();
        let loaded = rustls_native_certs::load_native_certs();

        for cert in loaded.certs {
            if let Err(e) = roots.add(cert) {
                tracing::warn!("Failed to add system certificate: {}", e);
            }
        }

        if !loaded.errors.is_empty() || roots.is_empty() {
            for err in &loaded.errors {
                tracing::warn!("Certificate load error: {}", err);
            }
            roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        }

        tracing::debug!("Loaded {} root certificates", roots.len());
        Self::with_roots(roots)
    }

    /// Trusts only the bundled webpki roots.
    #[must_use]
    pub fn webpki_roots() -> Self {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::with_roots(roots)
    }

    /// Trusts exactly `roots`.
    #[must_use]
    pub fn with_roots(roots: RootCertStore) -> Self {
        Self {
            roots: Arc::new(roots),
            provider: super::crypto_provider(),
        }
    }

    /// Trusts the certificates in a PEM bundle.
    ///
    /// # Errors
    ///
    /// Returns [`TlsError::CertificateStore`] if the bundle holds no
    /// certificate or a certificate cannot be used as a trust anchor.
    pub fn from_pem(pem_bundle: &str) -> Result<Self, TlsError> {
        let mut roots = RootCertStore::empty();
        add_pem(&mut roots, pem_bundle)?;
        Ok(Self::with_roots(roots))
    }

    /// Trusts `certs` given in DER form.
    ///
    /// # Errors
    ///
    /// Returns [`TlsError::CertificateStore`] if a certificate cannot be used
    /// as a trust anchor.
    pub fn from_der<I>(certs: I) -> Result<Self, TlsError>
    where
        I: IntoIterator<Item = CertificateDer<'static>>,
    {
        let mut roots = RootCertStore::empty();
        for cert in certs {
            roots
                .add(cert)
                .map_err(|e| TlsError::CertificateStore(format!("invalid root certificate: {e}")))?;
        }
        Ok(Self::with_roots(roots))
    }

    /// Number of trust anchors.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }
}

impl Default for WebPkiTrustManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WebPkiTrustManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebPkiTrustManager")
            .field("roots", &self.roots.len())
            .finish_non_exhaustive()
    }
}

impl TrustManager for WebPkiTrustManager {
    fn server_verifier(
        &self,
        verify_hostname: bool,
    ) -> Result<Arc<dyn ServerCertVerifier>, TlsError> {
        let webpki = WebPkiServerVerifier::builder_with_provider(
            Arc::clone(&self.roots),
            Arc::clone(&self.provider),
        )
        .build()
        .map_err(TlsError::Verifier)?;

        if verify_hostname {
            Ok(webpki)
        } else {
            Ok(Arc::new(ChainOnlyVerifier::new(webpki)))
        }
    }
}

fn add_pem(roots: &mut RootCertStore, pem_bundle: &str) -> Result<(), TlsError> {
    let blocks = pem::parse_many(pem_bundle)
        .map_err(|e| TlsError::CertificateStore(format!("invalid PEM data: {e}")))?;

    let mut added = 0usize;
    for block in blocks.iter().filter(|b| b.tag() == "CERTIFICATE") {
        let cert = CertificateDer::from(block.contents().to_vec());
        roots
            .add(cert)
            .map_err(|e| TlsError::CertificateStore(format!("invalid root certificate: {e}")))?;
        added += 1;
    }

    if added == 0 {
        return Err(TlsError::CertificateStore(
            "no CERTIFICATE block in PEM data".to_string(),
        ));
    }

    tracing::debug!("Added {} root certificates from PEM data", added);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn self_signed() -> rcgen::Certificate {
        let params = rcgen::CertificateParams::new(vec!["localhost".to_string()])
            .expect("valid certificate parameters");
        let key_pair = rcgen::KeyPair::generate().expect("key generation");
        params.self_signed(&key_pair).expect("self-signed certificate")
    }

    #[test]
    fn webpki_roots_are_not_empty() {
        assert!(WebPkiTrustManager::webpki_roots().root_count() > 0);
    }

    #[test]
    fn pem_bundle_becomes_trust_anchor() {
        let cert = self_signed();
        let trust = WebPkiTrustManager::from_pem(&cert.pem()).expect("PEM bundle is usable");
        assert_eq!(trust.root_count(), 1);
        assert!(trust.server_verifier(true).is_ok());
        assert!(trust.server_verifier(false).is_ok());
    }

    #[test]
    fn der_certificate_becomes_trust_anchor() {
        let cert = self_signed();
        let trust = WebPkiTrustManager::from_der([cert.der().clone()]).expect("DER is usable");
        assert_eq!(trust.root_count(), 1);
    }

    #[test]
    fn pem_without_certificates_is_rejected() {
        let err = WebPkiTrustManager::from_pem("not a pem bundle").expect_err("no certificates");
        assert!(matches!(err, TlsError::CertificateStore(_)));
    }

    #[test]
    fn empty_root_store_cannot_build_a_verifier() {
        let trust = WebPkiTrustManager::with_roots(RootCertStore::empty());
        assert!(matches!(trust.server_verifier(true), Err(TlsError::Verifier(_))));
    }
}
