use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    task::{Context, Poll},
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::transport::{Transport, TransportError, TransportRequest, TransportResponse};

/// Mock transport for internal testing
///
/// Runs a handler closure instead of touching the network and counts how
/// many requests reached it, so tests can assert that validation failures
/// never issue a request.
#[derive(Clone)]
pub(crate) struct MockTransport {
    handler:
        Arc<dyn Fn(TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync>,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    /// Create a new mock transport with a custom request handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock that answers every request with the given status and JSON body
    pub fn json(status: u16, body: &str) -> Self {
        let body = Bytes::from(body.to_string());
        Self::new(move |_| Ok(TransportResponse::new(status).body(body.clone())))
    }

    /// Mock that answers every request with a bare status code
    pub fn status(status: u16) -> Self {
        Self::new(move |_| Ok(TransportResponse::new(status)))
    }

    /// Mock that fails every request at the connection level
    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::new(move |_| Err(TransportError::Failed(message.clone())))
    }

    /// Number of requests that reached this transport
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        Poll::Ready(Ok(()))
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.handler)(request)
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.calls())
            .finish()
    }
}
