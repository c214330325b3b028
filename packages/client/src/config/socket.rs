//! Transport socket options
//!
//! Options applied to the TCP socket before and after connecting. Nothing is
//! set by default, so the platform's connect and I/O timeout behaviour
//! applies unless a caller opts in.

use std::time::Duration;

/// Socket options for every connection a factory opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SocketConfig {
    /// Upper bound for the TCP connect; `None` uses the platform timeout
    pub connect_timeout: Option<Duration>,
    /// Read timeout set on the connected socket
    pub read_timeout: Option<Duration>,
    /// Write timeout set on the connected socket
    pub write_timeout: Option<Duration>,
    /// Disable Nagle's algorithm
    pub nodelay: bool,
    /// Idle time before TCP keepalive probes start; `None` leaves keepalive off
    pub keepalive: Option<Duration>,
}

impl SocketConfig {
    /// Socket configuration for interactive streaming: bounded connect and
    /// read, no Nagle delay, keepalive on.
    #[must_use]
    pub fn streaming() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(5)),
            read_timeout: Some(Duration::from_secs(30)),
            write_timeout: Some(Duration::from_secs(30)),
            nodelay: true,
            keepalive: Some(Duration::from_secs(60)),
        }
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }

    #[must_use]
    pub fn with_keepalive(mut self, idle: Duration) -> Self {
        self.keepalive = Some(idle);
        self
    }

    /// Validate socket configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configured duration is zero, which the
    /// socket APIs reject.
    pub fn validate(&self) -> Result<(), String> {
        let durations = [
            ("connect_timeout", self.connect_timeout),
            ("read_timeout", self.read_timeout),
            ("write_timeout", self.write_timeout),
            ("keepalive", self.keepalive),
        ];

        for (name, value) in durations {
            if value.is_some_and(|d| d.is_zero()) {
                return Err(format!("{name} must be greater than 0"));
            }
        }

        Ok(())
    }
}
