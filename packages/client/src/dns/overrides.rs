//! Resolver with fixed hostname overrides

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;

use super::gai::GaiResolver;
use super::resolve::{Name, Resolve};

/// DNS resolver with hostname overrides for testing and custom routing.
///
/// Overridden hostnames return their configured addresses verbatim, in the
/// configured order; every other name falls through to the wrapped resolver.
#[derive(Debug, Clone, Default)]
pub struct ResolverWithOverrides<R = GaiResolver> {
    resolver: R,
    overrides: HashMap<String, Vec<IpAddr>>,
}

impl<R: Resolve> ResolverWithOverrides<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            overrides: HashMap::new(),
        }
    }

    /// Pins `hostname` to `addrs`. Hostnames are matched case-insensitively.
    #[must_use]
    pub fn with_override<I>(mut self, hostname: &str, addrs: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        self.overrides
            .insert(hostname.to_ascii_lowercase(), addrs.into_iter().collect());
        self
    }
}

impl<R: Resolve> Resolve for ResolverWithOverrides<R> {
    fn lookup(&self, name: &Name) -> io::Result<Vec<IpAddr>> {
        match self.overrides.get(&name.as_str().to_ascii_lowercase()) {
            Some(addrs) => Ok(addrs.clone()),
            None => self.resolver.lookup(name),
        }
    }
}
