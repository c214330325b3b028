//! TLS-specific error types for detailed error handling

use std::io;

use rustls::CertificateError;

/// TLS-specific error types for detailed error handling
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("invalid TLS server name '{name}'")]
    InvalidServerName {
        name: String,
        #[source]
        source: rustls::pki_types::InvalidDnsNameError,
    },
    #[error("TLS configuration failed")]
    Config(#[source] rustls::Error),
    #[error("certificate verifier could not be built")]
    Verifier(#[source] rustls::client::VerifierBuilderError),
    #[error("certificate store error: {0}")]
    CertificateStore(String),
    #[error("certificate presented by {host} was rejected")]
    Certificate {
        host: String,
        #[source]
        source: rustls::Error,
    },
    #[error("TLS handshake with {host} failed")]
    Handshake {
        host: String,
        #[source]
        source: rustls::Error,
    },
    #[error("I/O error during TLS handshake with {host}")]
    Io {
        host: String,
        #[source]
        source: io::Error,
    },
}

impl TlsError {
    /// Classifies an I/O error raised while driving a handshake with `host`.
    ///
    /// rustls reports protocol and verification failures as `InvalidData`
    /// I/O errors wrapping a [`rustls::Error`]; those are unwrapped so the
    /// certificate case can be told apart from transport failures.
    pub(crate) fn from_handshake_io(host: &str, err: io::Error) -> Self {
        let host = host.to_string();
        let tls = err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<rustls::Error>())
            .cloned();

        match tls {
            Some(source @ rustls::Error::InvalidCertificate(_)) => Self::Certificate { host, source },
            Some(source) => Self::Handshake { host, source },
            None => Self::Io { host, source: err },
        }
    }

    /// Returns true if the peer certificate was rejected.
    #[must_use]
    pub fn is_certificate(&self) -> bool {
        matches!(self, Self::Certificate { .. })
    }

    /// The certificate verification failure, if that is what happened.
    #[must_use]
    pub fn certificate_error(&self) -> Option<&CertificateError> {
        match self {
            Self::Certificate {
                source: rustls::Error::InvalidCertificate(err),
                ..
            } => Some(err),
            _ => None,
        }
    }

    /// Returns true if the certificate is valid but not for the target host.
    #[must_use]
    pub fn is_hostname_mismatch(&self) -> bool {
        self.certificate_error().is_some_and(is_name_mismatch)
    }
}

pub(crate) fn is_name_mismatch(err: &CertificateError) -> bool {
    matches!(
        err,
        CertificateError::NotValidForName | CertificateError::NotValidForNameContext { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_failures_are_unwrapped() {
        let io = io::Error::new(
            io::ErrorKind::InvalidData,
            rustls::Error::InvalidCertificate(CertificateError::UnknownIssuer),
        );
        let err = TlsError::from_handshake_io("localhost", io);

        assert!(err.is_certificate());
        assert!(!err.is_hostname_mismatch());
        assert_eq!(err.certificate_error(), Some(&CertificateError::UnknownIssuer));
    }

    #[test]
    fn name_mismatch_is_recognised() {
        let io = io::Error::new(
            io::ErrorKind::InvalidData,
            rustls::Error::InvalidCertificate(CertificateError::NotValidForName),
        );
        assert!(TlsError::from_handshake_io("127.0.0.1", io).is_hostname_mismatch());
    }

    #[test]
    fn protocol_failures_are_handshake_errors() {
        let io = io::Error::new(
            io::ErrorKind::InvalidData,
            rustls::Error::AlertReceived(rustls::AlertDescription::HandshakeFailure),
        );
        let err = TlsError::from_handshake_io("localhost", io);
        assert!(matches!(err, TlsError::Handshake { .. }));
        assert!(!err.is_certificate());
    }

    #[test]
    fn plain_io_failures_stay_io() {
        let err = TlsError::from_handshake_io("localhost", io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, TlsError::Io { ref source, .. } if source.kind() == io::ErrorKind::UnexpectedEof));
    }
}
