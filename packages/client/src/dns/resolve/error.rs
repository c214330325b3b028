//! DNS resolution error types

use std::io;

use crate::filter::IpVersionFilter;

/// Hostname resolution failures
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("empty hostname")]
    EmptyHostname,
    #[error("unable to resolve {hostname}")]
    Lookup {
        hostname: String,
        #[source]
        source: io::Error,
    },
    #[error("no addresses returned for {hostname}")]
    NoAddresses { hostname: String },
    #[error("not able to resolve any {filter} addresses for {hostname}")]
    NoMatchingAddress {
        hostname: String,
        filter: IpVersionFilter,
    },
}

impl ResolveError {
    /// The hostname that failed to resolve, if one was given.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        match self {
            Self::EmptyHostname => None,
            Self::Lookup { hostname, .. }
            | Self::NoAddresses { hostname }
            | Self::NoMatchingAddress { hostname, .. } => Some(hostname),
        }
    }

    /// The filter that rejected every candidate, for filter mismatches.
    #[must_use]
    pub fn filter(&self) -> Option<IpVersionFilter> {
        match self {
            Self::NoMatchingAddress { filter, .. } => Some(*filter),
            _ => None,
        }
    }
}
