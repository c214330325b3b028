use std::fmt;

/// Marker error for a URI whose scheme is neither `http` nor `https`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedScheme {
    pub scheme: String,
}

impl fmt::Display for UnsupportedScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported scheme '{}', expected http or https", self.scheme)
    }
}

impl std::error::Error for UnsupportedScheme {}

/// Marker error for a URI without a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingScheme;

impl fmt::Display for MissingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("URI has no scheme")
    }
}

impl std::error::Error for MissingScheme {}

/// Marker error for a URI without a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingHost;

impl fmt::Display for MissingHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("URI has no host")
    }
}

impl std::error::Error for MissingHost {}
