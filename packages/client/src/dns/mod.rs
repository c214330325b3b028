//! DNS resolution

pub use gai::GaiResolver;
pub use overrides::ResolverWithOverrides;
pub use resolve::{FilteredResolver, Name, Resolve, ResolveError, ResolvedAddress, ResolvedAddrs};

mod gai;
mod overrides;
pub mod resolve;
