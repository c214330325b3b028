//! Client configuration with region and endpoint defaults
//!
//! A [`ClientConfiguration`] is always complete: whatever the builder (or a
//! configuration file) leaves out is filled in by [`ClientConfigurationBuilder::build`].

use std::time::Duration;

use kvsnet_client::{ConnectionFactory, IpVersionFilter, Socket, SocketConfig};
use serde::Deserialize;

use crate::endpoints;

/// Where and how a streaming client connects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ClientConfigurationBuilder")]
pub struct ClientConfiguration {
    region: String,
    endpoint: String,
    legacy_endpoint: bool,
    ip_version_filter: IpVersionFilter,
    connection_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl ClientConfiguration {
    #[must_use]
    pub fn builder() -> ClientConfigurationBuilder {
        ClientConfigurationBuilder::default()
    }

    #[must_use]
    pub fn service_name(&self) -> &'static str {
        endpoints::SERVICE_NAME
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Control plane host name, without scheme.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn is_legacy_endpoint(&self) -> bool {
        self.legacy_endpoint
    }

    #[must_use]
    pub fn ip_version_filter(&self) -> IpVersionFilter {
        self.ip_version_filter
    }

    #[must_use]
    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout
    }

    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// `https://` URI of the endpoint. An endpoint that already carries a
    /// scheme is returned unchanged.
    #[must_use]
    pub fn endpoint_uri(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            format!("https://{}", self.endpoint)
        }
    }

    /// Socket options derived from the configured timeouts.
    #[must_use]
    pub fn socket_config(&self) -> SocketConfig {
        let mut socket = SocketConfig::default();
        socket.connect_timeout = self.connection_timeout;
        socket.read_timeout = self.read_timeout;
        socket
    }

    /// Connection factory using the system resolver, the platform trust
    /// store and this configuration's socket options.
    #[must_use]
    pub fn connection_factory(&self) -> ConnectionFactory {
        ConnectionFactory::new().with_socket_config(self.socket_config())
    }

    /// Opens a TLS socket to the endpoint through an address allowed by the
    /// configured IP version filter.
    ///
    /// # Errors
    ///
    /// Returns the [`ConnectionError`](kvsnet_client::ConnectionError) of
    /// the failed resolution, connect or handshake.
    pub fn connect(&self) -> kvsnet_client::Result<Socket> {
        self.connection_factory()
            .connect_filtered(self.endpoint_uri(), self.ip_version_filter)
    }
}

/// Builder for [`ClientConfiguration`].
///
/// Also the serialized form: every field is optional and timeouts are
/// given in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfigurationBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    legacy_endpoint: Option<bool>,
    ip_version_filter: Option<IpVersionFilter>,
    connection_timeout_ms: Option<u64>,
    read_timeout_ms: Option<u64>,
}

impl ClientConfigurationBuilder {
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Overrides the control plane host name derived from the region.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Chooses between the legacy and the dual-stack endpoint when the
    /// endpoint is derived from the region.
    #[must_use]
    pub fn legacy_endpoint(mut self, legacy: bool) -> Self {
        self.legacy_endpoint = Some(legacy);
        self
    }

    #[must_use]
    pub fn ip_version_filter(mut self, filter: IpVersionFilter) -> Self {
        self.ip_version_filter = Some(filter);
        self
    }

    #[must_use]
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout_ms = Some(millis(timeout));
        self
    }

    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout_ms = Some(millis(timeout));
        self
    }

    /// Fills in defaults and builds the configuration.
    ///
    /// - region: `us-west-2`
    /// - legacy endpoint: `true`
    /// - endpoint: the control plane endpoint of the region
    /// - IP version filter: `IPV4_AND_IPV6`
    /// - timeouts: unset; a zero timeout also means unset
    #[must_use]
    pub fn build(self) -> ClientConfiguration {
        let legacy_endpoint = self.legacy_endpoint.unwrap_or(endpoints::USE_LEGACY_ENDPOINT);

        let region = self.region.unwrap_or_else(|| {
            tracing::info!("Using default region: {}", endpoints::US_WEST_2);
            endpoints::US_WEST_2.to_string()
        });

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| endpoints::control_plane_endpoint_for(&region, legacy_endpoint));

        ClientConfiguration {
            region,
            endpoint,
            legacy_endpoint,
            ip_version_filter: self
                .ip_version_filter
                .unwrap_or(endpoints::BOTH_IPV4_AND_IPV6),
            connection_timeout: timeout(self.connection_timeout_ms),
            read_timeout: timeout(self.read_timeout_ms),
        }
    }
}

impl From<ClientConfigurationBuilder> for ClientConfiguration {
    fn from(builder: ClientConfigurationBuilder) -> Self {
        builder.build()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn timeout(ms: Option<u64>) -> Option<Duration> {
    ms.filter(|ms| *ms > 0).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_and_endpoint_defaults() {
        // (region, endpoint, legacy, expected region, expected endpoint)
        let cases: [(Option<&str>, Option<&str>, Option<bool>, &str, &str); 9] = [
            (None, None, None, "us-west-2", "kinesisvideo.us-west-2.amazonaws.com"),
            (None, None, Some(true), "us-west-2", "kinesisvideo.us-west-2.amazonaws.com"),
            (None, None, Some(false), "us-west-2", "kinesisvideo.us-west-2.api.aws"),
            (Some("eu-central-1"), None, Some(true), "eu-central-1", "kinesisvideo.eu-central-1.amazonaws.com"),
            (Some("eu-central-1"), None, Some(false), "eu-central-1", "kinesisvideo.eu-central-1.api.aws"),
            (None, Some("custom-endpoint.amazonaws.com"), Some(true), "us-west-2", "custom-endpoint.amazonaws.com"),
            (None, Some("custom-endpoint.api.aws"), Some(false), "us-west-2", "custom-endpoint.api.aws"),
            (Some("cn-north-1"), None, Some(true), "cn-north-1", "kinesisvideo.cn-north-1.amazonaws.com.cn"),
            (Some("cn-north-1"), None, Some(false), "cn-north-1", "kinesisvideo.cn-north-1.api.amazonwebservices.com.cn"),
        ];

        for (region, endpoint, legacy, expected_region, expected_endpoint) in cases {
            let mut builder = ClientConfiguration::builder();
            if let Some(region) = region {
                builder = builder.region(region);
            }
            if let Some(endpoint) = endpoint {
                builder = builder.endpoint(endpoint);
            }
            if let Some(legacy) = legacy {
                builder = builder.legacy_endpoint(legacy);
            }

            let config = builder.build();
            assert_eq!(config.region(), expected_region, "{region:?} {endpoint:?} {legacy:?}");
            assert_eq!(config.endpoint(), expected_endpoint, "{region:?} {endpoint:?} {legacy:?}");
        }
    }

    #[test]
    fn legacy_and_filter_defaults() {
        let config = ClientConfiguration::builder().build();
        assert!(config.is_legacy_endpoint());
        assert_eq!(config.ip_version_filter(), IpVersionFilter::Either);
        assert_eq!(config.service_name(), "kinesisvideo");
        assert_eq!(config.connection_timeout(), None);
        assert_eq!(config.endpoint_uri(), "https://kinesisvideo.us-west-2.amazonaws.com");
    }

    #[test]
    fn timeouts_reach_the_socket_config() {
        let config = ClientConfiguration::builder()
            .connection_timeout(Duration::from_millis(1500))
            .read_timeout(Duration::from_secs(20))
            .build();

        let socket = config.socket_config();
        assert_eq!(socket.connect_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(socket.read_timeout, Some(Duration::from_secs(20)));
        assert!(socket.validate().is_ok());
    }

    #[test]
    fn zero_timeout_means_unset() {
        let config = ClientConfiguration::builder()
            .connection_timeout(Duration::ZERO)
            .build();
        assert_eq!(config.connection_timeout(), None);
    }

    #[test]
    fn endpoint_with_scheme_is_kept() {
        let config = ClientConfiguration::builder()
            .endpoint("http://localhost:8080")
            .build();
        assert_eq!(config.endpoint_uri(), "http://localhost:8080");
    }
}
