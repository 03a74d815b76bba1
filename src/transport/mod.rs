//! Transport abstraction for the releases API

pub mod http;
#[cfg(test)]
pub mod mock;

use std::{
    collections::HashMap,
    task::{Context, Poll},
};

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// Failure raised by a transport while executing a request
///
/// Transports know nothing about logical operations; the service layer maps
/// these onto [`ReleasesError`](crate::protocol::ReleasesError) with the
/// operation name attached.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured timeout elapsed before a response arrived
    #[error("request timeout")]
    Timeout,

    /// Any other connection-level failure
    #[error("{0}")]
    Failed(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Failed(format!("connection error: {}", err))
        } else {
            TransportError::Failed(err.to_string())
        }
    }
}

/// A fully-resolved request ready for a transport to execute
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Absolute request URL, query string included
    pub url: Url,

    /// HTTP method (the releases API is GET-only)
    pub method: String,

    /// Headers for the request
    pub headers: HashMap<String, String>,
}

impl TransportRequest {
    /// Create a new transport request
    pub fn new(url: Url, method: impl Into<String>) -> Self {
        Self {
            url,
            method: method.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Response produced by a transport
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body, fully read before the transport returns
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Add a header to the response
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the response body
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Check if the response carries the API's single success status
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Core transport trait for executing requests
///
/// Implementations must read the response body to completion before
/// returning, so the underlying connection is released whether the call
/// succeeds or fails. Cancellation is the caller's: dropping the future
/// returned by [`execute`](Transport::execute) aborts the request.
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    /// Check if the transport is ready to accept a request
    ///
    /// Used by the Tower `Service` impl to surface backpressure
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), TransportError>>;

    /// Execute a request and return the raw response
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
