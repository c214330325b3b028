//! Post-connect TCP socket options

use std::io;
use std::net::TcpStream;

use crate::config::SocketConfig;

/// Apply the options of `config` that act on a connected stream.
///
/// # Errors
///
/// Returns the first I/O error reported while setting an option.
pub fn configure_tcp_socket(stream: &TcpStream, config: &SocketConfig) -> io::Result<()> {
    if config.nodelay {
        stream.set_nodelay(true)?;
    }

    // A `None` timeout is left alone rather than written, so the
    // platform default stays in place.
    if let Some(timeout) = config.read_timeout {
        stream.set_read_timeout(Some(timeout))?;
    }
    if let Some(timeout) = config.write_timeout {
        stream.set_write_timeout(Some(timeout))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, TcpListener};
    use std::time::Duration;

    use super::*;

    #[test]
    fn options_are_applied() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind listener");
        let stream =
            TcpStream::connect(listener.local_addr().expect("listener address")).expect("connect");

        let config = SocketConfig::default()
            .with_nodelay(true)
            .with_read_timeout(Duration::from_secs(7))
            .with_write_timeout(Duration::from_secs(9));
        configure_tcp_socket(&stream, &config).expect("configure socket");

        assert!(stream.nodelay().expect("read nodelay"));
        assert_eq!(stream.read_timeout().expect("read timeout"), Some(Duration::from_secs(7)));
        assert_eq!(stream.write_timeout().expect("write timeout"), Some(Duration::from_secs(9)));
    }

    #[test]
    fn default_config_changes_nothing() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind listener");
        let stream =
            TcpStream::connect(listener.local_addr().expect("listener address")).expect("connect");

        configure_tcp_socket(&stream, &SocketConfig::default()).expect("configure socket");

        assert_eq!(stream.read_timeout().expect("read timeout"), None);
        assert_eq!(stream.write_timeout().expect("write timeout"), None);
    }
}
