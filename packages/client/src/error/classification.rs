use std::error::Error as StdError;
use std::io;

use super::types::{Error, Kind};
use crate::dns::ResolveError;
use crate::tls::TlsError;

impl Error {
    /// Returns true if the URI could not be parsed or has no host.
    #[must_use]
    pub fn is_invalid_uri(&self) -> bool {
        matches!(self.kind(), Kind::InvalidUri)
    }

    /// Returns true if the URI scheme is not `http`/`https`.
    #[must_use]
    pub fn is_unsupported_scheme(&self) -> bool {
        matches!(self.kind(), Kind::UnsupportedScheme)
    }

    /// Returns true if hostname resolution failed, including the case where
    /// no resolved address satisfied the IP version filter.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self.kind(), Kind::HostResolution)
    }

    /// Returns true if no resolved address satisfied the IP version filter.
    #[must_use]
    pub fn is_filtered_out(&self) -> bool {
        self.resolve_error()
            .is_some_and(|e| matches!(e, ResolveError::NoMatchingAddress { .. }))
    }

    /// Returns true if the TCP connect or TLS handshake failed.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self.kind(), Kind::Connect)
    }

    /// Returns true if the failure happened during TLS negotiation.
    #[must_use]
    pub fn is_tls(&self) -> bool {
        self.tls_error().is_some()
    }

    /// Returns true if the peer certificate was rejected, including a
    /// hostname mismatch.
    #[must_use]
    pub fn is_certificate(&self) -> bool {
        self.tls_error().is_some_and(TlsError::is_certificate)
    }

    /// Returns true if the peer refused the TCP connection.
    #[must_use]
    pub fn is_refused(&self) -> bool {
        self.io_error()
            .is_some_and(|io| io.kind() == io::ErrorKind::ConnectionRefused)
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.io_error().is_some_and(|io| {
            matches!(io.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
        })
    }

    /// The resolution failure in the source chain, if any.
    #[must_use]
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        self.find_source::<ResolveError>()
    }

    /// The TLS failure in the source chain, if any.
    #[must_use]
    pub fn tls_error(&self) -> Option<&TlsError> {
        self.find_source::<TlsError>()
    }

    /// The first I/O error in the source chain, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        self.find_source::<io::Error>()
    }

    fn find_source<T: StdError + 'static>(&self) -> Option<&T> {
        let mut source = self.source();

        while let Some(err) = source {
            if let Some(found) = err.downcast_ref::<T>() {
                return Some(found);
            }
            source = err.source();
        }

        None
    }
}
