//! Releases API operations

use super::release::{ListReleasesParams, SpecificReleaseParams};

/// Logical operations against the releases API
///
/// Each variant is binding-independent: it knows its endpoint path, HTTP
/// method and query parameters, and the service layer turns it into a
/// concrete request URL.
#[derive(Debug, Clone)]
pub enum ReleasesOperation {
    /// List the names of all products on the releases site
    ListProductNames,

    /// List release metadata for a product, newest first
    ListReleases {
        /// Product to list releases for (e.g. "vault")
        product: String,

        /// Pagination and filter parameters
        params: ListReleasesParams,
    },

    /// Fetch the full metadata of a single release
    SpecificRelease {
        /// Product the release belongs to
        product: String,

        /// Exact version to fetch (e.g. "1.2.3")
        version: String,

        /// Filter parameters
        params: SpecificReleaseParams,
    },
}

impl ReleasesOperation {
    /// Get the endpoint path for this operation, relative to the base URL
    pub fn endpoint(&self) -> String {
        match self {
            ReleasesOperation::ListProductNames => "/products".to_string(),
            ReleasesOperation::ListReleases { product, .. } => {
                format!("/releases/{}", product)
            }
            ReleasesOperation::SpecificRelease {
                product, version, ..
            } => format!("/releases/{}/{}", product, version),
        }
    }

    /// Get the HTTP method for this operation
    pub fn method(&self) -> &'static str {
        match self {
            ReleasesOperation::ListProductNames => "GET",
            ReleasesOperation::ListReleases { .. } => "GET",
            ReleasesOperation::SpecificRelease { .. } => "GET",
        }
    }

    /// Get the operation name used to tag errors
    pub fn name(&self) -> &'static str {
        match self {
            ReleasesOperation::ListProductNames => "list product names",
            ReleasesOperation::ListReleases { .. } => "list releases",
            ReleasesOperation::SpecificRelease { .. } => "specific release",
        }
    }

    /// Get the query parameters for this operation as key/value pairs
    ///
    /// `limit` is always present for a release listing, `0` standing in for
    /// "server default" when the caller left it unset. `license_class` and
    /// `after` are omitted entirely when unset.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            ReleasesOperation::ListProductNames => Vec::new(),
            ReleasesOperation::ListReleases { params, .. } => {
                let mut pairs = vec![("limit", params.limit.unwrap_or(0).to_string())];
                if let Some(license_class) = params.license_class {
                    pairs.push(("license_class", license_class.as_str().to_string()));
                }
                if let Some(after) = &params.after {
                    pairs.push(("after", after.clone()));
                }
                pairs
            }
            ReleasesOperation::SpecificRelease { params, .. } => {
                let mut pairs = Vec::new();
                if let Some(license_class) = params.license_class {
                    pairs.push(("license_class", license_class.as_str().to_string()));
                }
                pairs
            }
        }
    }
}
