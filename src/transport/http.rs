//! HTTP transport implementation using reqwest

use std::task::{Context, Poll};

use async_trait::async_trait;

use super::{Transport, TransportError, TransportRequest, TransportResponse};

/// HTTP transport backed by a shared [`reqwest::Client`]
///
/// The client holds a connection pool internally, so cloning the transport
/// is cheap and clones reuse connections. No timeout is imposed here; pass a
/// pre-configured client via [`with_client`](HttpTransport::with_client) to
/// set one.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with a default client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create an HTTP transport from a caller-supplied reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        // reqwest clients are always ready
        Poll::Ready(Ok(()))
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut req_builder = match request.method.as_str() {
            "GET" => self.client.get(request.url.clone()),
            other => {
                return Err(TransportError::Failed(format!(
                    "unsupported HTTP method: {}",
                    other
                )))
            }
        };

        for (key, value) in request.headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        // Reading the body to completion releases the pooled connection even
        // when the status turns out to be an error.
        let body = response.bytes().await?;

        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
