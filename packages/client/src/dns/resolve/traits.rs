//! System resolver seam

use std::fmt;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;

use super::types::Name;

/// Hostname-to-address resolution used by [`FilteredResolver`](super::FilteredResolver).
///
/// Implementations return every candidate in their own order and must not
/// reorder or deduplicate; filtering happens on top of the result.
pub trait Resolve: fmt::Debug + Send + Sync {
    /// Resolve `name` to all known addresses.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the lookup itself fails, for
    /// example for an unknown host.
    fn lookup(&self, name: &Name) -> io::Result<Vec<IpAddr>>;
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn lookup(&self, name: &Name) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(name)
    }
}

impl<R: Resolve + ?Sized> Resolve for Box<R> {
    fn lookup(&self, name: &Name) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(name)
    }
}

impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn lookup(&self, name: &Name) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(name)
    }
}
