//! Connected socket handle returned by the connection factory

use std::fmt;
use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use rustls::{CipherSuite, ClientConnection, ProtocolVersion, StreamOwned};

/// A connected byte stream, plain TCP or TLS over TCP.
///
/// The caller owns the socket once it is returned; dropping it closes the
/// underlying TCP connection.
pub enum Socket {
    Plain(TcpStream),
    Tls(Box<StreamOwned<ClientConnection, TcpStream>>),
}

impl Socket {
    /// Returns true if traffic on this socket is TLS protected.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        matches!(self, Socket::Tls(_))
    }

    /// Address of the remote peer.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the peer address cannot be determined.
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.tcp().peer_addr()
    }

    /// Local address of this end of the connection.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the local address cannot be determined.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.tcp().local_addr()
    }

    /// Returns TLS information for this connection if available.
    #[must_use]
    pub fn tls_info(&self) -> Option<TlsInfo> {
        match self {
            Socket::Plain(_) => None,
            Socket::Tls(stream) => Some(TlsInfo::from_connection(&stream.conn)),
        }
    }

    /// The underlying TCP stream.
    #[must_use]
    pub fn tcp(&self) -> &TcpStream {
        match self {
            Socket::Plain(stream) => stream,
            Socket::Tls(stream) => stream.get_ref(),
        }
    }

    /// Closes the connection, sending a TLS `close_notify` first on a
    /// secure socket.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of flushing the alert or shutting down the
    /// TCP stream.
    pub fn shutdown(&mut self) -> io::Result<()> {
        if let Socket::Tls(stream) = self {
            stream.conn.send_close_notify();
            stream.flush()?;
        }
        self.tcp().shutdown(Shutdown::Both)
    }
}

impl Read for Socket {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Socket::Plain(stream) => stream.read(buf),
            Socket::Tls(stream) => stream.read(buf),
        }
    }
}

impl Write for Socket {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Socket::Plain(stream) => stream.write(buf),
            Socket::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Socket::Plain(stream) => stream.flush(),
            Socket::Tls(stream) => stream.flush(),
        }
    }
}

impl fmt::Debug for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Socket");
        f.field("secure", &self.is_secure());
        if let Ok(peer) = self.peer_addr() {
            f.field("peer", &peer);
        }
        f.finish()
    }
}

/// TLS connection information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsInfo {
    /// Negotiated protocol version
    pub protocol_version: Option<ProtocolVersion>,
    /// Negotiated cipher suite
    pub cipher_suite: Option<CipherSuite>,
    /// Peer end-entity certificate, DER encoded
    pub peer_certificate: Option<Vec<u8>>,
}

impl TlsInfo {
    fn from_connection(conn: &ClientConnection) -> Self {
        Self {
            protocol_version: conn.protocol_version(),
            cipher_suite: conn.negotiated_cipher_suite().map(|suite| suite.suite()),
            peer_certificate: conn
                .peer_certificates()
                .and_then(|chain| chain.first())
                .map(|cert| cert.as_ref().to_vec()),
        }
    }
}
