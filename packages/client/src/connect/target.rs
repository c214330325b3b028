//! Connection target derivation from a URI

use std::fmt;

use http::Uri;

use crate::config::{DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};
use crate::error::{self, MissingHost, MissingScheme};

/// URI schemes a connection can be opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Parses a scheme name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("http") {
            Some(Scheme::Http)
        } else if name.eq_ignore_ascii_case("https") {
            Some(Scheme::Https)
        } else {
            None
        }
    }

    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => DEFAULT_HTTP_PORT,
            Scheme::Https => DEFAULT_HTTPS_PORT,
        }
    }

    #[must_use]
    pub fn is_secure(self) -> bool {
        matches!(self, Scheme::Https)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a connection goes: scheme, host and a port in `1..=65535`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl ConnectionTarget {
    /// Derives the target of `uri`.
    ///
    /// The port is the URI's explicit port when it is greater than zero,
    /// otherwise the scheme default.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidUri`](crate::Kind::InvalidUri) error when the URI
    /// has no scheme or no host, and an
    /// [`UnsupportedScheme`](crate::Kind::UnsupportedScheme) error for any
    /// scheme other than `http`/`https`.
    pub fn from_uri(uri: &Uri) -> crate::Result<Self> {
        let scheme_name = uri
            .scheme_str()
            .ok_or_else(|| error::invalid_uri(MissingScheme))?;
        let scheme =
            Scheme::from_name(scheme_name).ok_or_else(|| error::unsupported_scheme(scheme_name))?;

        let host = uri
            .host()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| error::invalid_uri(MissingHost))?;

        let port = uri
            .port_u16()
            .filter(|port| *port > 0)
            .unwrap_or_else(|| scheme.default_port());

        Ok(ConnectionTarget {
            scheme,
            host: host.to_string(),
            port,
        })
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The URI host, brackets included for IPv6 literals.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.scheme.is_secure()
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}
