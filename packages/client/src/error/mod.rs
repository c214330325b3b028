pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{MissingHost, MissingScheme, UnsupportedScheme};
pub use types::{Error, Kind, Result};

/// The error returned by every connection attempt.
pub type ConnectionError = Error;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
