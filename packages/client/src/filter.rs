//! IP-version policy for resolved connection targets
//!
//! A filter decides which address families a connection may use. It is a
//! plain `Copy` value, created once from configuration and handed to every
//! resolution that has to honour it.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Address families a connection is allowed to use.
///
/// The external names (`IPV4`, `IPV6`, `IPV4_AND_IPV6`) are the ones accepted
/// in configuration files and by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IpVersionFilter {
    /// Only IPv4 addresses
    #[serde(rename = "IPV4")]
    Ipv4Only,
    /// Only IPv6 addresses
    #[serde(rename = "IPV6")]
    Ipv6Only,
    /// Any address family (no filtering)
    #[default]
    #[serde(rename = "IPV4_AND_IPV6")]
    Either,
}

impl IpVersionFilter {
    /// Returns true if `addr` satisfies this policy.
    #[must_use]
    pub fn matches(self, addr: &IpAddr) -> bool {
        match self {
            Self::Ipv4Only => addr.is_ipv4(),
            Self::Ipv6Only => addr.is_ipv6(),
            Self::Either => true,
        }
    }

    /// Same as [`matches`](Self::matches) for a socket address.
    #[must_use]
    pub fn matches_socket_addr(self, addr: &SocketAddr) -> bool {
        self.matches(&addr.ip())
    }

    /// Configuration name of this filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ipv4Only => "IPV4",
            Self::Ipv6Only => "IPV6",
            Self::Either => "IPV4_AND_IPV6",
        }
    }
}

impl fmt::Display for IpVersionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown IP version filter '{0}', expected IPV4, IPV6 or IPV4_AND_IPV6")]
pub struct ParseFilterError(String);

impl FromStr for IpVersionFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Ipv4Only, Self::Ipv6Only, Self::Either]
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFilterError(name.to_string()))
    }
}
