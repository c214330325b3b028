//! Connection configuration
//!
//! Configuration values are explicit and passed in at construction; there
//! are no process-wide defaults to mutate.

pub mod socket;

pub use socket::SocketConfig;

/// Default port for `http` targets
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Default port for `https` targets
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// The factory always asks its trust manager for hostname verification.
pub const VERIFY_HOSTNAME: bool = true;
