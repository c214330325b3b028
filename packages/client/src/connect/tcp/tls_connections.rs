//! TLS session establishment over a connected TCP stream

use std::net::TcpStream;
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, StreamOwned};

use crate::tls::TlsError;

/// Wraps `stream` in a rustls client session for `host` and drives the
/// handshake to completion.
///
/// `host` is the URI host: a DNS name or an IP literal, with or without the
/// brackets of an IPv6 literal. It is used both for SNI and for the
/// certificate name check.
///
/// # Errors
///
/// Returns [`TlsError::InvalidServerName`] if `host` is not a valid server
/// name, [`TlsError::Certificate`] if the peer certificate is rejected, and
/// [`TlsError::Handshake`] or [`TlsError::Io`] for any other failure. The
/// stream is dropped, and so closed, on failure.
pub fn establish_rustls_connection(
    mut stream: TcpStream,
    host: &str,
    config: Arc<ClientConfig>,
) -> Result<StreamOwned<ClientConnection, TcpStream>, TlsError> {
    let server_name = server_name(host)?;
    let mut conn = ClientConnection::new(config, server_name).map_err(TlsError::Config)?;

    while conn.is_handshaking() {
        conn.complete_io(&mut stream)
            .map_err(|err| TlsError::from_handshake_io(host, err))?;
    }

    tracing::info!(
        host,
        version = ?conn.protocol_version(),
        cipher_suite = ?conn.negotiated_cipher_suite().map(|suite| suite.suite()),
        "TLS session established"
    );

    Ok(StreamOwned::new(conn, stream))
}

fn server_name(host: &str) -> Result<ServerName<'static>, TlsError> {
    let bare = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    ServerName::try_from(bare.to_string()).map_err(|source| TlsError::InvalidServerName {
        name: host.to_string(),
        source,
    })
}
