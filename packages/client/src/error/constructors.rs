use super::BoxError;
use super::helpers::UnsupportedScheme;
use super::types::{Error, Kind};
use crate::dns::ResolveError;

/// Creates an `Error` for a URI that cannot be used as a connection target.
pub fn invalid_uri<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidUri).with(e.into())
}

/// Creates an `Error` for a scheme other than `http`/`https`.
pub fn unsupported_scheme(scheme: &str) -> Error {
    Error::new(Kind::UnsupportedScheme).with(UnsupportedScheme {
        scheme: scheme.to_string(),
    })
}

/// Creates an `Error` for a failed or fully filtered resolution.
pub fn host_resolution(e: ResolveError) -> Error {
    Error::new(Kind::HostResolution).with(e)
}

/// Creates an `Error` for a failed TCP connect or TLS handshake.
pub fn connect<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Connect).with(e.into())
}
