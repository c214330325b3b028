use std::error::Error as StdError;
use std::fmt;

use super::BoxError;

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a resolution or connection attempt.
///
/// The [`Kind`] says which stage failed; the original cause is kept as the
/// error [`source`](StdError::source) and can be inspected with the
/// classification methods instead of matching on messages.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<BoxError>,
    uri: Option<http::Uri>,
}

/// Stage of connection establishment that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The URI could not be parsed or has no host
    InvalidUri,
    /// The URI scheme is neither `http` nor `https`
    UnsupportedScheme,
    /// Hostname resolution failed or no address matched the IP version filter
    HostResolution,
    /// TCP connect or TLS handshake failed
    Connect,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                uri: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_uri(mut self, uri: http::Uri) -> Self {
        self.inner.uri = Some(uri);
        self
    }

    /// The stage that failed.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// The URI of the failed attempt, if known.
    #[must_use]
    pub fn uri(&self) -> Option<&http::Uri> {
        self.inner.uri.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("kvsnet::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref uri) = self.inner.uri {
            f.field("uri", uri);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::InvalidUri => f.write_str("invalid URI")?,
            Kind::UnsupportedScheme => f.write_str("unsupported URI scheme")?,
            Kind::HostResolution => f.write_str("host resolution failed")?,
            Kind::Connect => f.write_str("connection establishment failed")?,
        }

        if let Some(ref uri) = self.inner.uri {
            write!(f, " for {uri}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
