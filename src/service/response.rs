//! Service response types

use std::collections::BTreeSet;

use crate::protocol::release::Release;

/// Response from a releases service operation
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// Unique product names (from ListProductNames)
    ProductNames(BTreeSet<String>),

    /// Releases in server order, newest first (from ListReleases)
    Releases(Vec<Release>),

    /// A single release (from SpecificRelease)
    Release(Box<Release>),
}

impl ApiResponse {
    /// Extract the product-name set, if present
    pub fn into_product_names(self) -> Option<BTreeSet<String>> {
        match self {
            ApiResponse::ProductNames(products) => Some(products),
            _ => None,
        }
    }

    /// Extract the release list, if present
    pub fn into_releases(self) -> Option<Vec<Release>> {
        match self {
            ApiResponse::Releases(releases) => Some(releases),
            _ => None,
        }
    }

    /// Extract the single release, if present
    pub fn into_release(self) -> Option<Release> {
        match self {
            ApiResponse::Release(release) => Some(*release),
            _ => None,
        }
    }
}
