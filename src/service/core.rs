//! Core releases service implementation

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use tower_service::Service;
use url::Url;

use crate::{
    codec::Codec,
    protocol::{error::ReleasesError, operation::ReleasesOperation},
    service::{ApiRequest, ApiResponse},
    transport::{Transport, TransportError, TransportRequest},
};

/// Core service that executes releases API operations over a transport
///
/// Implements the Tower `Service` trait: it resolves the operation to a full
/// request URL, executes it via the transport, maps non-200 statuses to
/// structured errors carrying the exact URL, and decodes the body through
/// the codec.
pub struct ReleasesService<T> {
    transport: T,
    codec: Arc<dyn Codec>,
}

impl<T> ReleasesService<T>
where
    T: Transport,
{
    /// Create a new releases service
    ///
    /// # Arguments
    ///
    /// * `transport` - The underlying transport implementation
    /// * `codec` - The codec for response decoding
    pub fn new(transport: T, codec: Arc<dyn Codec>) -> Self {
        Self { transport, codec }
    }

    /// Resolve an operation against the base URL, query string included
    fn build_url(base_url: &Url, operation: &ReleasesOperation) -> Result<Url, ReleasesError> {
        let mut url = Url::parse(&format!("{}{}", base_url, operation.endpoint()))
            .map_err(|e| ReleasesError::Validation(format!("invalid request url: {}", e)))?;

        let query = operation.query();
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Build the transport request for an operation
    fn build_transport_request(
        req: &ApiRequest,
        codec: &dyn Codec,
    ) -> Result<TransportRequest, ReleasesError> {
        let url = Self::build_url(&req.context.base_url, &req.operation)?;

        Ok(TransportRequest::new(url, req.operation.method())
            .header("Accept", codec.content_type()))
    }
}

impl<T> Service<ApiRequest> for ReleasesService<T>
where
    T: Transport + Clone,
{
    type Response = ApiResponse;
    type Error = ReleasesError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.transport.poll_ready(cx).map_err(|e| ReleasesError::Transport {
            operation: "transport readiness",
            message: e.to_string(),
        })
    }

    fn call(&mut self, req: ApiRequest) -> Self::Future {
        let transport = self.transport.clone();
        let codec = self.codec.clone();

        Box::pin(async move {
            let operation = req.operation.name();

            let transport_req = Self::build_transport_request(&req, codec.as_ref())?;
            let url = transport_req.url.clone();

            let transport_resp =
                transport
                    .execute(transport_req)
                    .await
                    .map_err(|e| match e {
                        TransportError::Timeout => ReleasesError::Timeout { operation },
                        TransportError::Failed(message) => ReleasesError::Transport {
                            operation,
                            message,
                        },
                    })?;

            if !transport_resp.is_success() {
                return Err(ReleasesError::Http {
                    operation,
                    status: transport_resp.status.to_string(),
                    url: url.to_string(),
                });
            }

            codec.decode_response(&transport_resp.body, &req.operation)
        })
    }
}

impl<T> Clone for ReleasesService<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            codec: self.codec.clone(),
        }
    }
}
