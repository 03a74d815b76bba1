//! Parameter validation for releases API requests

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower_layer::Layer;
use tower_service::Service;

use crate::{
    protocol::{error::ReleasesError, operation::ReleasesOperation},
    service::{ApiRequest, ApiResponse},
};

/// Largest page size the releases API accepts
pub const MAX_LIMIT: u32 = 20;

/// Layer that validates caller parameters before any request is sent
#[derive(Clone, Debug, Default)]
pub struct ValidationLayer;

impl ValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ValidationLayer {
    type Service = ValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ValidationService { inner }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone)]
pub struct ValidationService<S> {
    inner: S,
}

impl<S> ValidationService<S> {
    /// Validate a request; failures here never reach the transport
    fn validate_request(req: &ApiRequest) -> Result<(), ReleasesError> {
        match &req.operation {
            ReleasesOperation::ListProductNames => {}
            ReleasesOperation::ListReleases { product, params } => {
                if product.is_empty() {
                    return Err(ReleasesError::Validation(
                        "product name cannot be empty".into(),
                    ));
                }
                if let Some(limit) = params.limit {
                    if limit > MAX_LIMIT {
                        return Err(ReleasesError::Validation(
                            "the limit parameter must be 20 or less".into(),
                        ));
                    }
                }
            }
            ReleasesOperation::SpecificRelease {
                product, version, ..
            } => {
                if product.is_empty() {
                    return Err(ReleasesError::Validation(
                        "product name cannot be empty".into(),
                    ));
                }
                if version.is_empty() {
                    return Err(ReleasesError::Validation("version cannot be empty".into()));
                }
            }
        }

        Ok(())
    }
}

impl<S> Service<ApiRequest> for ValidationService<S>
where
    S: Service<ApiRequest, Response = ApiResponse, Error = ReleasesError> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = ApiResponse;
    type Error = ReleasesError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: ApiRequest) -> Self::Future {
        if let Err(e) = Self::validate_request(&req) {
            return Box::pin(async move { Err(e) });
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(req).await })
    }
}
