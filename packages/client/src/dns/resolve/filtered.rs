//! IP version filtered resolution

use std::net::IpAddr;
use std::sync::Arc;

use tracing::debug;

use super::error::ResolveError;
use super::traits::Resolve;
use super::types::{Name, ResolvedAddress, ResolvedAddrs};
use crate::dns::GaiResolver;
use crate::filter::IpVersionFilter;

/// Resolver that only returns addresses allowed by an [`IpVersionFilter`].
#[derive(Debug, Clone, Default)]
pub struct FilteredResolver<R = GaiResolver> {
    resolver: R,
}

impl FilteredResolver<GaiResolver> {
    /// Filtered resolver on top of the system resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(GaiResolver::new())
    }
}

impl<R: Resolve> FilteredResolver<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolves `hostname` and keeps only the addresses matching `filter`,
    /// preserving the resolver's order.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::EmptyHostname`] for an empty hostname
    /// - [`ResolveError::Lookup`] when the underlying resolution fails
    /// - [`ResolveError::NoAddresses`] when the resolver returns nothing
    /// - [`ResolveError::NoMatchingAddress`] when no address satisfies `filter`
    pub fn resolve(
        &self,
        hostname: &str,
        filter: IpVersionFilter,
    ) -> Result<ResolvedAddrs, ResolveError> {
        let name = Name::new(hostname)?;
        debug!(hostname = %name, %filter, "resolving");

        let candidates = self.lookup(&name)?;
        let shared: Arc<str> = Arc::from(name.as_str());
        let matched: Vec<ResolvedAddress> = candidates
            .into_iter()
            .inspect(|ip| debug!(hostname = %name, %ip, "resolved IP"))
            .filter(|ip| filter.matches(ip))
            .map(|ip| ResolvedAddress::new(ip, Arc::clone(&shared)))
            .collect();

        let addrs = ResolvedAddrs::from_vec(matched).ok_or_else(|| {
            ResolveError::NoMatchingAddress {
                hostname: name.to_string(),
                filter,
            }
        })?;

        debug!(hostname = %name, %filter, ips = ?addrs.ips(), "filtered IPs");
        Ok(addrs)
    }

    /// Resolves `hostname` without any family filtering.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve), except that
    /// [`ResolveError::NoMatchingAddress`] is never returned.
    pub fn resolve_unfiltered(&self, hostname: &str) -> Result<ResolvedAddrs, ResolveError> {
        let name = Name::new(hostname)?;
        debug!(hostname = %name, "resolving without filter");

        let shared: Arc<str> = Arc::from(name.as_str());
        let addrs = self
            .lookup(&name)?
            .into_iter()
            .map(|ip| ResolvedAddress::new(ip, Arc::clone(&shared)))
            .collect();

        // lookup() already rejected an empty result
        ResolvedAddrs::from_vec(addrs).ok_or_else(|| ResolveError::NoAddresses {
            hostname: name.to_string(),
        })
    }

    fn lookup(&self, name: &Name) -> Result<Vec<IpAddr>, ResolveError> {
        let candidates = self
            .resolver
            .lookup(name)
            .map_err(|source| ResolveError::Lookup {
                hostname: name.to_string(),
                source,
            })?;

        if candidates.is_empty() {
            return Err(ResolveError::NoAddresses {
                hostname: name.to_string(),
            });
        }

        Ok(candidates)
    }
}
