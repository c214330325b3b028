//! Connection handle types

pub mod connection;

pub use connection::{Socket, TlsInfo};
