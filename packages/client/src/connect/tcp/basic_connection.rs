//! Basic TCP connection establishment
//!
//! Opens a single TCP connection to one already-resolved address. Address
//! selection happens before this point; nothing here iterates or retries.

use std::io;
use std::net::{SocketAddr, TcpStream};

use socket2::{Domain, Protocol, SockAddr, Socket, TcpKeepalive, Type};

use crate::config::SocketConfig;

/// Connect to `addr`, applying the pre-connect options of `config`.
///
/// Keepalive is set before the connect so it covers the whole lifetime of
/// the socket. The connect timeout, when present, bounds the TCP handshake
/// only.
///
/// # Errors
///
/// Returns `InvalidInput` for a configuration rejected by
/// [`SocketConfig::validate`], otherwise the I/O error of socket creation,
/// option setting or connect.
pub fn connect_tcp(addr: SocketAddr, config: &SocketConfig) -> io::Result<TcpStream> {
    config
        .validate()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    if let Some(idle) = config.keepalive {
        socket.set_tcp_keepalive(&TcpKeepalive::new().with_time(idle))?;
    }

    let target = SockAddr::from(addr);
    match config.connect_timeout {
        Some(timeout) => socket.connect_timeout(&target, timeout)?,
        None => socket.connect(&target)?,
    }

    tracing::debug!(%addr, "TCP connection established");
    Ok(TcpStream::from(socket))
}
