//! Hostname resolution with IP version filtering
//!
//! [`FilteredResolver`] asks a system [`Resolve`] implementation for every
//! candidate address of a hostname and keeps the ones that satisfy an
//! [`IpVersionFilter`](crate::IpVersionFilter). Nothing is cached; every call
//! goes back to the underlying resolver.

pub mod error;
pub mod filtered;
pub mod traits;
pub mod types;

pub use error::ResolveError;
pub use filtered::FilteredResolver;
pub use traits::Resolve;
pub use types::{Name, ResolvedAddress, ResolvedAddrs};
