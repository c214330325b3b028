//! Connection factory: resolve, filter, connect, secure

use std::fmt;
use std::sync::Arc;

use http::Uri;
use tracing::debug;

use super::target::ConnectionTarget;
use super::tcp::{configure_tcp_socket, connect_tcp, establish_rustls_connection};
use super::types::Socket;
use crate::config::{SocketConfig, VERIFY_HOSTNAME};
use crate::dns::{FilteredResolver, GaiResolver, Resolve, ResolvedAddrs};
use crate::error;
use crate::filter::IpVersionFilter;
use crate::tls::{TrustManager, WebPkiTrustManager, tls12_client_config};

/// Opens plain or TLS sockets to URIs, optionally restricted to one IP
/// version.
///
/// Every call resolves the host again, connects to the first permitted
/// address and, for `https`, completes a TLS 1.2 handshake verified by the
/// configured [`TrustManager`]. There is no retry, no pooling and no
/// fallback to further addresses.
///
/// The factory holds no mutable state and can be shared between threads.
pub struct ConnectionFactory<R = GaiResolver> {
    resolver: FilteredResolver<R>,
    trust: Arc<dyn TrustManager>,
    socket: SocketConfig,
}

impl ConnectionFactory<GaiResolver> {
    /// Factory using the system resolver, the platform trust store and
    /// default socket options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(GaiResolver::new())
    }
}

impl Default for ConnectionFactory<GaiResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resolve> ConnectionFactory<R> {
    pub fn with_resolver(resolver: R) -> Self {
        ConnectionFactory {
            resolver: FilteredResolver::with_resolver(resolver),
            trust: Arc::new(WebPkiTrustManager::new()),
            socket: SocketConfig::default(),
        }
    }

    /// Replaces the trust manager that verifies server certificates.
    #[must_use]
    pub fn with_trust_manager(mut self, trust: Arc<dyn TrustManager>) -> Self {
        self.trust = trust;
        self
    }

    #[must_use]
    pub fn with_socket_config(mut self, socket: SocketConfig) -> Self {
        self.socket = socket;
        self
    }

    pub fn resolver(&self) -> &FilteredResolver<R> {
        &self.resolver
    }

    pub fn socket_config(&self) -> &SocketConfig {
        &self.socket
    }

    /// Connects to `uri` using every address family the system resolver
    /// returns.
    ///
    /// # Errors
    ///
    /// See [`connect_filtered`](Self::connect_filtered); the filter mismatch
    /// case cannot occur.
    pub fn connect<U>(&self, uri: U) -> crate::Result<Socket>
    where
        U: TryInto<Uri>,
        U::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let uri = uri.try_into().map_err(error::invalid_uri)?;
        self.open(uri, None)
    }

    /// Connects to `uri` through an address allowed by `filter`.
    ///
    /// # Errors
    ///
    /// - [`Kind::InvalidUri`](crate::Kind::InvalidUri) for an unparsable URI or
    ///   one without a host
    /// - [`Kind::UnsupportedScheme`](crate::Kind::UnsupportedScheme) for
    ///   anything but `http`/`https`, before any network I/O
    /// - [`Kind::HostResolution`](crate::Kind::HostResolution) when the host
    ///   cannot be resolved or no address satisfies `filter`
    /// - [`Kind::Connect`](crate::Kind::Connect) when the TCP connect or the
    ///   TLS handshake fails
    pub fn connect_filtered<U>(&self, uri: U, filter: IpVersionFilter) -> crate::Result<Socket>
    where
        U: TryInto<Uri>,
        U::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let uri = uri.try_into().map_err(error::invalid_uri)?;
        self.open(uri, Some(filter))
    }

    fn open(&self, uri: Uri, filter: Option<IpVersionFilter>) -> crate::Result<Socket> {
        self.open_target(&uri, filter)
            .map_err(|err| err.with_uri(uri))
    }

    fn open_target(&self, uri: &Uri, filter: Option<IpVersionFilter>) -> crate::Result<Socket> {
        let target = ConnectionTarget::from_uri(uri)?;
        let addrs = self.resolve(&target, filter)?;
        let addr = addrs.first().socket_addr(target.port());

        // Built before connecting so a trust store problem never leaves a
        // half-open TCP connection behind.
        let tls_config = if target.is_secure() {
            let config =
                tls12_client_config(self.trust.as_ref(), VERIFY_HOSTNAME).map_err(error::connect)?;
            Some(config)
        } else {
            None
        };

        debug!(%target, %addr, "connecting");
        let stream = connect_tcp(addr, &self.socket).map_err(error::connect)?;
        configure_tcp_socket(&stream, &self.socket).map_err(error::connect)?;

        match tls_config {
            None => Ok(Socket::Plain(stream)),
            Some(config) => {
                let tls = establish_rustls_connection(stream, target.host(), config)
                    .map_err(error::connect)?;
                Ok(Socket::Tls(Box::new(tls)))
            }
        }
    }

    fn resolve(
        &self,
        target: &ConnectionTarget,
        filter: Option<IpVersionFilter>,
    ) -> crate::Result<ResolvedAddrs> {
        match filter {
            Some(filter) => self.resolver.resolve(target.host(), filter),
            None => self.resolver.resolve_unfiltered(target.host()),
        }
        .map_err(error::host_resolution)
    }
}

impl<R: fmt::Debug> fmt::Debug for ConnectionFactory<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionFactory")
            .field("resolver", &self.resolver)
            .field("trust", &self.trust)
            .field("socket", &self.socket)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, TcpListener};

    use super::*;
    use crate::dns::ResolverWithOverrides;

    fn overridden(hostname: &str, ips: Vec<IpAddr>) -> ConnectionFactory<ResolverWithOverrides> {
        ConnectionFactory::with_resolver(
            ResolverWithOverrides::new(GaiResolver::new()).with_override(hostname, ips),
        )
    }

    #[test]
    fn unsupported_scheme_fails_before_resolution() {
        // would fail resolution if it got that far
        let factory = ConnectionFactory::new();
        let err = factory
            .connect("ftp://nonexistent.invalid")
            .expect_err("ftp is unsupported");

        assert!(err.is_unsupported_scheme());
        assert!(!err.is_resolution());
        assert!(err.uri().is_some());
    }

    #[test]
    fn unparsable_uri_is_invalid() {
        let err = ConnectionFactory::new()
            .connect("http://exa mple.com")
            .expect_err("space in host");
        assert!(err.is_invalid_uri());
    }

    #[test]
    fn filter_without_match_is_a_resolution_error() {
        let factory = overridden("v4only.test", vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
        let err = factory
            .connect_filtered("http://v4only.test", IpVersionFilter::Ipv6Only)
            .expect_err("no IPv6 address");

        assert!(err.is_resolution());
        assert!(err.is_filtered_out());
        assert!(err.to_string().starts_with("host resolution failed for http://v4only.test"));
    }

    #[test]
    fn first_permitted_address_is_used() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind listener");
        let port = listener.local_addr().expect("listener address").port();

        // the IPv6 candidate comes first but is filtered out
        let factory = overridden(
            "mixed.test",
            vec![
                IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)),
                IpAddr::V4(Ipv4Addr::LOCALHOST),
            ],
        );

        let server = std::thread::spawn(move || {
            let (mut peer, _) = listener.accept().expect("accept");
            peer.write_all(b"hello").expect("write greeting");
        });

        let mut socket = factory
            .connect_filtered(format!("http://mixed.test:{port}"), IpVersionFilter::Ipv4Only)
            .expect("connect over IPv4");
        let peer = socket.peer_addr().expect("peer address");
        assert_eq!(peer.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(peer.port(), port);

        let mut greeting = String::new();
        socket.read_to_string(&mut greeting).expect("read greeting");
        assert_eq!(greeting, "hello");
        server.join().expect("server thread");
    }
}
