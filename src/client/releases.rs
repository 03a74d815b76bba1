//! High-level releases API client

use std::collections::BTreeSet;

use tower_service::Service;

use crate::{
    client::config::ClientConfig,
    protocol::{
        error::ReleasesError,
        operation::ReleasesOperation,
        release::{ListReleasesParams, Release, SpecificReleaseParams},
    },
    service::{ApiRequest, ApiResponse, RequestContext},
};

/// High-level client for the releases API
///
/// Wraps a Tower service and exposes the three logical operations. The
/// client keeps no per-call state; clone it to share across tasks — clones
/// share the transport's connection pool.
///
/// Dropping the future returned by any operation cancels the in-flight
/// request.
///
/// # Example
///
/// ```rust,no_run
/// use hashicorp_releases::prelude::*;
///
/// # async fn example() -> Result<(), ReleasesError> {
/// let mut client = ReleasesClientBuilder::new_http().build()?;
///
/// let release = client.specific_release("vault", "1.2.3", None).await?;
/// println!("{} {}", release.name, release.version);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ReleasesClient<S> {
    service: S,
    config: ClientConfig,
}

impl<S> ReleasesClient<S>
where
    S: Service<ApiRequest, Response = ApiResponse, Error = ReleasesError>,
{
    /// Create a new releases client
    ///
    /// # Arguments
    ///
    /// * `service` - The Tower service that executes requests
    /// * `config` - Client configuration
    pub fn new(service: S, config: ClientConfig) -> Self {
        Self { service, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request context from the client configuration
    fn build_context(&self) -> RequestContext {
        RequestContext::new(self.config.base_url.clone())
    }

    /// List the names of all products on the releases site
    ///
    /// # Returns
    ///
    /// The set of unique product names; duplicates in the server response
    /// are collapsed
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a JSON
    /// array of strings
    pub async fn list_product_names(&mut self) -> Result<BTreeSet<String>, ReleasesError> {
        let operation = ReleasesOperation::ListProductNames;
        let name = operation.name();

        let request = ApiRequest::new(operation, self.build_context());
        let response = self.service.call(request).await?;

        response
            .into_product_names()
            .ok_or(ReleasesError::UnexpectedResponse { operation: name })
    }

    /// List release metadata for a product
    ///
    /// Results are ordered by release creation time from newest to oldest,
    /// exactly as the server returns them. Products with many releases are
    /// paginated: pass the creation timestamp of the oldest release on the
    /// current page as [`ListReleasesParams::after`] to fetch the next one.
    ///
    /// # Arguments
    ///
    /// * `product` - Product to list releases for (e.g. "vault")
    /// * `params` - Optional pagination and filter parameters
    ///
    /// # Errors
    ///
    /// Returns a validation error without issuing a request when
    /// `params.limit` exceeds 20
    pub async fn list_releases(
        &mut self,
        product: impl Into<String>,
        params: Option<ListReleasesParams>,
    ) -> Result<Vec<Release>, ReleasesError> {
        let operation = ReleasesOperation::ListReleases {
            product: product.into(),
            params: params.unwrap_or_default(),
        };
        let name = operation.name();

        let request = ApiRequest::new(operation, self.build_context());
        let response = self.service.call(request).await?;

        response
            .into_releases()
            .ok_or(ReleasesError::UnexpectedResponse { operation: name })
    }

    /// Fetch all metadata for a single product release
    ///
    /// # Arguments
    ///
    /// * `product` - Product the release belongs to
    /// * `version` - Exact version to fetch (e.g. "1.2.3")
    /// * `params` - Optional filter parameters
    pub async fn specific_release(
        &mut self,
        product: impl Into<String>,
        version: impl Into<String>,
        params: Option<SpecificReleaseParams>,
    ) -> Result<Release, ReleasesError> {
        let operation = ReleasesOperation::SpecificRelease {
            product: product.into(),
            version: version.into(),
            params: params.unwrap_or_default(),
        };
        let name = operation.name();

        let request = ApiRequest::new(operation, self.build_context());
        let response = self.service.call(request).await?;

        response
            .into_release()
            .ok_or(ReleasesError::UnexpectedResponse { operation: name })
    }
}
