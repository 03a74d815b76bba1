//! Client configuration

use url::Url;

/// Production endpoint of the releases API
pub const DEFAULT_BASE_URL: &str = "https://api.releases.hashicorp.com/v1";

/// Configuration for a releases client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: Url,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// The production endpoint as a parsed URL
    pub fn default_base_url() -> Url {
        DEFAULT_BASE_URL
            .parse()
            .expect("default base url is valid")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::default_base_url())
    }
}
