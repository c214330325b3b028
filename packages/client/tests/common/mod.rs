//! Shared fixtures for connection integration tests

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{IpAddr, TcpListener};
use std::sync::Arc;
use std::thread::JoinHandle;

use kvsnet_client::{FilteredResolver, IpVersionFilter};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::{ServerConfig, ServerConnection, StreamOwned};

/// Self-signed `localhost` certificate and the server config presenting it.
pub struct LocalhostIdentity {
    pub cert_der: CertificateDer<'static>,
    pub cert_pem: String,
    pub server_config: Arc<ServerConfig>,
}

pub fn localhost_identity() -> LocalhostIdentity {
    let params = rcgen::CertificateParams::new(vec!["localhost".to_string()])
        .expect("valid certificate parameters");
    let key_pair = rcgen::KeyPair::generate().expect("key generation");
    let cert = params.self_signed(&key_pair).expect("self-signed certificate");

    let cert_der = cert.der().clone();
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

    // The server offers 1.2 and 1.3; the client decides what is negotiated.
    let server_config = ServerConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_protocol_versions(&[&rustls::version::TLS12, &rustls::version::TLS13])
    .expect("server protocol versions")
    .with_no_client_auth()
    .with_single_cert(vec![cert_der.clone()], key)
    .expect("server certificate");

    LocalhostIdentity {
        cert_der,
        cert_pem: cert.pem(),
        server_config: Arc::new(server_config),
    }
}

/// Binds an ephemeral listener on the first address `localhost` resolves to
/// under `filter`, so the factory reaches the same socket.
pub fn localhost_listener(filter: IpVersionFilter) -> Option<TcpListener> {
    let addrs = FilteredResolver::new().resolve("localhost", filter).ok()?;
    bind(addrs.first().ip())
}

pub fn bind(ip: IpAddr) -> Option<TcpListener> {
    match TcpListener::bind((ip, 0)) {
        Ok(listener) => Some(listener),
        Err(e) => {
            eprintln!("skipping: cannot bind {ip}: {e}");
            None
        }
    }
}

/// Accepts one plain connection and echoes a 4 byte message.
pub fn spawn_plain_echo(listener: TcpListener) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut buf = [0u8; 4];
        if stream.read_exact(&mut buf).is_ok() {
            let _ = stream.write_all(&buf);
        }
    })
}

/// Accepts one TLS connection and echoes a 4 byte message. Handshake
/// failures end the thread quietly; the client side asserts on them.
pub fn spawn_tls_echo(listener: TcpListener, config: Arc<ServerConfig>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let Ok((tcp, _)) = listener.accept() else {
            return;
        };
        let Ok(conn) = ServerConnection::new(config) else {
            return;
        };
        let mut tls = StreamOwned::new(conn, tcp);

        let mut buf = [0u8; 4];
        if tls.read_exact(&mut buf).is_ok() {
            let _ = tls.write_all(&buf);
            let _ = tls.flush();
        }
    })
}
