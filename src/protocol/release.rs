//! Release metadata types and request parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// License classification of a release
///
/// Usable as a query filter: when set, only releases with a matching license
/// class are returned by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LicenseClass {
    /// Commercial enterprise release
    Enterprise,

    /// Open source release
    Oss,
}

impl LicenseClass {
    /// The wire representation used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseClass::Enterprise => "enterprise",
            LicenseClass::Oss => "oss",
        }
    }
}

impl std::fmt::Display for LicenseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single published release
///
/// A read-only snapshot as returned by the server. Field names match the
/// wire format; optional URL fields are omitted or null for some products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// Per-platform build artifacts belonging to this release
    #[serde(default)]
    pub builds: Vec<Build>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_name_tag: Option<String>,

    /// Whether this is a prerelease version
    pub is_prerelease: bool,

    /// License class as reported by the server (e.g. "oss", "enterprise")
    pub license_class: String,

    /// Product name this release belongs to
    pub name: String,

    /// Lifecycle status of the release
    pub status: Status,

    /// When the release was published
    pub timestamp_created: DateTime<Utc>,

    /// When the release metadata was last updated
    pub timestamp_updated: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_blogpost: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_changelog: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_docker_registry_dockerhub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_docker_registry_ecr: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_project_website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_release_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_shasums: Option<String>,

    /// Detached signature URLs for the shasums file
    #[serde(default)]
    pub url_shasums_signatures: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_source_repository: Option<String>,

    /// Version string of the release (e.g. "1.2.3")
    pub version: String,
}

/// Lifecycle status embedded in a release
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    /// Human-readable explanation of the state
    #[serde(default)]
    pub message: String,

    /// State identifier (e.g. "supported", "unsupported", "withdrawn")
    pub state: String,
}

/// A single downloadable build artifact
///
/// Owned by its parent [`Release`]; builds have no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Build {
    /// Target architecture (e.g. "amd64", "arm64")
    pub arch: String,

    /// Target operating system (e.g. "linux", "darwin")
    pub os: String,

    /// Whether the platform is unsupported
    #[serde(default)]
    pub unsupported: bool,

    /// Download URL for the artifact
    pub url: String,
}

/// Parameters for listing releases of a product
///
/// All fields are optional; an unset limit still sends `limit=0` so the
/// server applies its documented default of 10 per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReleasesParams {
    /// Maximum number of releases per page, at most 20
    pub limit: Option<u32>,

    /// Pagination cursor: the creation timestamp of the oldest release on
    /// the previous page. Only releases created before it are returned.
    pub after: Option<String>,

    /// Restrict results to a single license class
    pub license_class: Option<LicenseClass>,
}

impl ListReleasesParams {
    /// Create empty parameters (server defaults apply)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size (must be 20 or less)
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the pagination cursor
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Filter by license class
    pub fn with_license_class(mut self, license_class: LicenseClass) -> Self {
        self.license_class = Some(license_class);
        self
    }
}

/// Parameters for fetching a specific release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecificReleaseParams {
    /// Restrict the lookup to a single license class
    pub license_class: Option<LicenseClass>,
}

impl SpecificReleaseParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by license class
    pub fn with_license_class(mut self, license_class: LicenseClass) -> Self {
        self.license_class = Some(license_class);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_release_json() -> &'static str {
        r#"{
            "builds": [
                {
                    "arch": "amd64",
                    "os": "linux",
                    "unsupported": false,
                    "url": "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_linux_amd64.zip"
                },
                {
                    "arch": "arm64",
                    "os": "darwin",
                    "unsupported": false,
                    "url": "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_darwin_arm64.zip"
                }
            ],
            "is_prerelease": false,
            "license_class": "oss",
            "name": "vault",
            "status": {
                "message": "",
                "state": "supported"
            },
            "timestamp_created": "2019-07-30T14:19:03.000Z",
            "timestamp_updated": "2019-07-30T14:19:03.000Z",
            "url_changelog": "https://github.com/hashicorp/vault/blob/main/CHANGELOG.md",
            "url_shasums": "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_SHA256SUMS",
            "url_shasums_signatures": [
                "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_SHA256SUMS.sig"
            ],
            "url_source_repository": "https://github.com/hashicorp/vault",
            "version": "1.2.3"
        }"#
    }

    #[test]
    fn test_release_deserialization() {
        let release: Release = serde_json::from_str(sample_release_json()).unwrap();

        assert_eq!(release.name, "vault");
        assert_eq!(release.version, "1.2.3");
        assert!(!release.is_prerelease);
        assert_eq!(release.license_class, "oss");
        assert_eq!(release.status.state, "supported");
        assert_eq!(release.builds.len(), 2);
        assert_eq!(release.builds[0].arch, "amd64");
        assert_eq!(release.builds[0].os, "linux");
        assert!(release.url_blogpost.is_none());
        assert_eq!(release.url_shasums_signatures.len(), 1);
    }

    #[test]
    fn test_release_round_trip() {
        let release: Release = serde_json::from_str(sample_release_json()).unwrap();

        let json = serde_json::to_string(&release).unwrap();
        let decoded: Release = serde_json::from_str(&json).unwrap();

        assert_eq!(release, decoded);
    }

    #[test]
    fn test_absent_optional_urls_are_not_serialized() {
        let release: Release = serde_json::from_str(sample_release_json()).unwrap();
        let json = serde_json::to_value(&release).unwrap();

        assert!(json.get("url_blogpost").is_none());
        assert!(json.get("docker_name_tag").is_none());
        assert_eq!(
            json["url_source_repository"],
            "https://github.com/hashicorp/vault"
        );
    }

    #[test]
    fn test_license_class_serialization() {
        assert_eq!(
            serde_json::to_value(LicenseClass::Enterprise).unwrap(),
            "enterprise"
        );
        assert_eq!(serde_json::to_value(LicenseClass::Oss).unwrap(), "oss");
        assert_eq!(LicenseClass::Enterprise.to_string(), "enterprise");
    }

    #[test]
    fn test_list_releases_params_builder() {
        let params = ListReleasesParams::new()
            .with_limit(5)
            .with_after("2019-07-30T14:19:03.000Z")
            .with_license_class(LicenseClass::Oss);

        assert_eq!(params.limit, Some(5));
        assert_eq!(params.after.as_deref(), Some("2019-07-30T14:19:03.000Z"));
        assert_eq!(params.license_class, Some(LicenseClass::Oss));

        let empty = ListReleasesParams::default();
        assert_eq!(empty.limit, None);
    }
}
