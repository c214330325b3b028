//! Core DNS types

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use super::error::ResolveError;

/// Hostname to resolve, with IPv6 literal brackets removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Box<str>);

impl Name {
    /// Creates a name from a URI host, stripping `[` `]` around IPv6 literals.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyHostname`] when nothing is left.
    pub fn new(host: &str) -> Result<Self, ResolveError> {
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if host.is_empty() {
            return Err(ResolveError::EmptyHostname);
        }

        Ok(Name(host.into()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address, if this name is an IP literal.
    #[must_use]
    pub fn ip_literal(&self) -> Option<IpAddr> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved address with hostname reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    ip: IpAddr,
    hostname: Arc<str>,
}

impl ResolvedAddress {
    pub fn new(ip: IpAddr, hostname: Arc<str>) -> Self {
        Self { ip, hostname }
    }

    #[must_use]
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// The hostname this address was resolved from.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn is_ipv4(&self) -> bool {
        self.ip.is_ipv4()
    }

    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        self.ip.is_ipv6()
    }

    /// Socket address for connecting to `port` on this address.
    #[must_use]
    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.ip, port)
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.hostname, self.ip)
    }
}

/// Non-empty list of resolved addresses in resolver order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddrs {
    addrs: Vec<ResolvedAddress>,
}

impl ResolvedAddrs {
    /// Wraps `addrs`, or returns `None` if it is empty.
    #[must_use]
    pub fn from_vec(addrs: Vec<ResolvedAddress>) -> Option<Self> {
        if addrs.is_empty() {
            None
        } else {
            Some(Self { addrs })
        }
    }

    /// The preferred (first) address.
    #[must_use]
    pub fn first(&self) -> &ResolvedAddress {
        &self.addrs[0]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ResolvedAddress] {
        &self.addrs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedAddress> {
        self.addrs.iter()
    }

    /// The bare IP addresses, in order.
    #[must_use]
    pub fn ips(&self) -> Vec<IpAddr> {
        self.addrs.iter().map(ResolvedAddress::ip).collect()
    }
}

impl IntoIterator for ResolvedAddrs {
    type Item = ResolvedAddress;
    type IntoIter = std::vec::IntoIter<ResolvedAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedAddrs {
    type Item = &'a ResolvedAddress;
    type IntoIter = std::slice::Iter<'a, ResolvedAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addrs.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;

    #[test]
    fn name_strips_ipv6_brackets() {
        let name = Name::new("[::1]").expect("bracketed literal is a valid name");
        assert_eq!(name.as_str(), "::1");
        assert_eq!(name.ip_literal(), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
    }

    #[test]
    fn name_rejects_empty_host() {
        assert!(matches!(Name::new(""), Err(ResolveError::EmptyHostname)));
        assert!(matches!(Name::new("[]"), Err(ResolveError::EmptyHostname)));
    }

    #[test]
    fn hostname_is_not_an_ip_literal() {
        let name = Name::new("kinesisvideo.us-west-2.amazonaws.com").expect("valid name");
        assert_eq!(name.ip_literal(), None);
    }

    #[test]
    fn resolved_addrs_are_never_empty() {
        assert!(ResolvedAddrs::from_vec(Vec::new()).is_none());

        let host: Arc<str> = Arc::from("localhost");
        let addrs = ResolvedAddrs::from_vec(vec![
            ResolvedAddress::new(IpAddr::V6(Ipv6Addr::LOCALHOST), Arc::clone(&host)),
            ResolvedAddress::new(IpAddr::V4(Ipv4Addr::LOCALHOST), host),
        ])
        .expect("two addresses");

        assert!(addrs.first().is_ipv6());
        assert_eq!(addrs.first().socket_addr(8080).port(), 8080);
        assert_eq!(addrs.as_slice().len(), 2);
    }
}
