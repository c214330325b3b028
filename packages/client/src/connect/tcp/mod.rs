//! Blocking TCP and TLS socket establishment

pub mod basic_connection;
pub mod socket_config;
pub mod tls_connections;

pub use basic_connection::connect_tcp;
pub use socket_config::configure_tcp_socket;
pub use tls_connections::establish_rustls_connection;
