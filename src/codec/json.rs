//! JSON codec for the releases API wire format

use std::collections::BTreeSet;

use crate::{
    codec::Codec,
    protocol::{error::ReleasesError, operation::ReleasesOperation, release::Release},
    service::response::ApiResponse,
};

/// JSON codec for the releases API
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn decode_response(
        &self,
        body: &[u8],
        operation: &ReleasesOperation,
    ) -> Result<ApiResponse, ReleasesError> {
        let decode_err = |source| ReleasesError::Decode {
            operation: operation.name(),
            source,
        };

        match operation {
            ReleasesOperation::ListProductNames => {
                // The server may repeat names; the set collapses duplicates.
                let names: Vec<String> = serde_json::from_slice(body).map_err(decode_err)?;
                let products: BTreeSet<String> = names.into_iter().collect();
                Ok(ApiResponse::ProductNames(products))
            }
            ReleasesOperation::ListReleases { .. } => {
                // Server order is newest-first and is preserved as-is.
                let releases: Vec<Release> = serde_json::from_slice(body).map_err(decode_err)?;
                Ok(ApiResponse::Releases(releases))
            }
            ReleasesOperation::SpecificRelease { .. } => {
                let release: Release = serde_json::from_slice(body).map_err(decode_err)?;
                Ok(ApiResponse::Release(Box::new(release)))
            }
        }
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::release::{ListReleasesParams, SpecificReleaseParams};

    use super::*;

    #[test]
    fn test_decode_product_names_dedups() {
        let codec = JsonCodec;
        let body = br#"["terraform","vault","terraform","nomad"]"#;

        let response = codec
            .decode_response(body, &ReleasesOperation::ListProductNames)
            .unwrap();

        match response {
            ApiResponse::ProductNames(products) => {
                assert_eq!(products.len(), 3);
                assert!(products.contains("terraform"));
                assert!(products.contains("vault"));
                assert!(products.contains("nomad"));
            }
            _ => panic!("expected product names response"),
        }
    }

    #[test]
    fn test_decode_releases_preserves_order() {
        let codec = JsonCodec;
        let body = br#"[
            {
                "builds": [],
                "is_prerelease": false,
                "license_class": "oss",
                "name": "vault",
                "status": {"message": "", "state": "supported"},
                "timestamp_created": "2023-03-01T10:00:00.000Z",
                "timestamp_updated": "2023-03-01T10:00:00.000Z",
                "url_shasums_signatures": [],
                "version": "1.13.0"
            },
            {
                "builds": [],
                "is_prerelease": false,
                "license_class": "oss",
                "name": "vault",
                "status": {"message": "", "state": "supported"},
                "timestamp_created": "2023-02-01T10:00:00.000Z",
                "timestamp_updated": "2023-02-01T10:00:00.000Z",
                "url_shasums_signatures": [],
                "version": "1.12.3"
            }
        ]"#;

        let operation = ReleasesOperation::ListReleases {
            product: "vault".to_string(),
            params: ListReleasesParams::default(),
        };

        let response = codec.decode_response(body, &operation).unwrap();

        match response {
            ApiResponse::Releases(releases) => {
                assert_eq!(releases.len(), 2);
                assert_eq!(releases[0].version, "1.13.0");
                assert_eq!(releases[1].version, "1.12.3");
            }
            _ => panic!("expected releases response"),
        }
    }

    #[test]
    fn test_decode_specific_release() {
        let codec = JsonCodec;
        let body = br#"{
            "builds": [],
            "is_prerelease": false,
            "license_class": "oss",
            "name": "vault",
            "status": {"message": "", "state": "supported"},
            "timestamp_created": "2019-07-30T14:19:03.000Z",
            "timestamp_updated": "2019-07-30T14:19:03.000Z",
            "url_shasums_signatures": [],
            "version": "1.2.3"
        }"#;

        let operation = ReleasesOperation::SpecificRelease {
            product: "vault".to_string(),
            version: "1.2.3".to_string(),
            params: SpecificReleaseParams::default(),
        };

        let response = codec.decode_response(body, &operation).unwrap();

        match response {
            ApiResponse::Release(release) => assert_eq!(release.version, "1.2.3"),
            _ => panic!("expected single release response"),
        }
    }

    #[test]
    fn test_decode_error_names_operation() {
        let codec = JsonCodec;

        let err = codec
            .decode_response(b"<html>oops</html>", &ReleasesOperation::ListProductNames)
            .unwrap_err();

        match err {
            ReleasesError::Decode { operation, .. } => {
                assert_eq!(operation, "list product names");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_content_type() {
        assert_eq!(JsonCodec.content_type(), "application/json");
    }
}
