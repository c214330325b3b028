//! Control plane endpoint defaults
//!
//! Endpoints are host names only; the scheme is added by
//! [`ClientConfiguration::endpoint_uri`](crate::ClientConfiguration::endpoint_uri).

use kvsnet_client::IpVersionFilter;

/// Region used when a configuration names none.
pub const US_WEST_2: &str = "us-west-2";

/// Whether the legacy (IPv4-only) endpoint is used unless asked otherwise.
pub const USE_LEGACY_ENDPOINT: bool = true;

/// Signing name of the service.
pub const SERVICE_NAME: &str = "kinesisvideo";

/// Filter used when a configuration names none; lets every address through.
pub const BOTH_IPV4_AND_IPV6: IpVersionFilter = IpVersionFilter::Either;

const CN_REGION_PREFIX: &str = "cn-";

/// Legacy control plane endpoint of `region`.
#[must_use]
pub fn control_plane_endpoint(region: &str) -> String {
    if region.starts_with(CN_REGION_PREFIX) {
        format!("kinesisvideo.{region}.amazonaws.com.cn")
    } else {
        format!("kinesisvideo.{region}.amazonaws.com")
    }
}

/// Legacy or dual-stack control plane endpoint of `region`.
#[must_use]
pub fn control_plane_endpoint_for(region: &str, legacy: bool) -> String {
    if legacy {
        return control_plane_endpoint(region);
    }

    if region.starts_with(CN_REGION_PREFIX) {
        format!("kinesisvideo.{region}.api.amazonwebservices.com.cn")
    } else {
        format!("kinesisvideo.{region}.api.aws")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_table() {
        let cases = [
            ("us-west-2", true, "kinesisvideo.us-west-2.amazonaws.com"),
            ("eu-central-1", true, "kinesisvideo.eu-central-1.amazonaws.com"),
            ("cn-north-1", true, "kinesisvideo.cn-north-1.amazonaws.com.cn"),
            ("cn-northwest-1", true, "kinesisvideo.cn-northwest-1.amazonaws.com.cn"),
            ("us-west-2", false, "kinesisvideo.us-west-2.api.aws"),
            ("eu-central-1", false, "kinesisvideo.eu-central-1.api.aws"),
            ("cn-north-1", false, "kinesisvideo.cn-north-1.api.amazonwebservices.com.cn"),
            ("cn-northwest-1", false, "kinesisvideo.cn-northwest-1.api.amazonwebservices.com.cn"),
        ];

        for (region, legacy, expected) in cases {
            assert_eq!(
                control_plane_endpoint_for(region, legacy),
                expected,
                "region={region} legacy={legacy}"
            );
        }
    }

    #[test]
    fn single_argument_form_is_legacy() {
        assert_eq!(
            control_plane_endpoint("ap-northeast-1"),
            control_plane_endpoint_for("ap-northeast-1", true)
        );
    }
}
