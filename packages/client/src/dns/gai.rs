//! System getaddrinfo-based resolver

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use super::resolve::{Name, Resolve};

/// Resolver backed by the platform's `getaddrinfo`.
///
/// IP literals are returned as-is without a lookup. Hostnames go through
/// [`ToSocketAddrs`], and the addresses come back in the order the system
/// resolver produced them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaiResolver {
    _priv: (),
}

impl GaiResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolve for GaiResolver {
    fn lookup(&self, name: &Name) -> io::Result<Vec<IpAddr>> {
        // Fast path for IP addresses
        if let Some(ip) = name.ip_literal() {
            return Ok(vec![ip]);
        }

        // Port doesn't matter for hostname resolution
        let addrs = (name.as_str(), 0).to_socket_addrs()?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}
