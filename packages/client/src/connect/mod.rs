//! Connection establishment
//!
//! [`ConnectionFactory`] turns a URI into a connected [`Socket`]: the URI
//! becomes a [`ConnectionTarget`], the host is resolved (optionally through an
//! IP version filter), a TCP connection is opened to the first permitted
//! address and, for `https`, wrapped in a TLS 1.2 session.

pub mod factory;
pub mod target;
pub mod tcp;
pub mod types;

pub use factory::ConnectionFactory;
pub use target::{ConnectionTarget, Scheme};
pub use tcp::{configure_tcp_socket, connect_tcp, establish_rustls_connection};
pub use types::{Socket, TlsInfo};
