//! Service request types

use url::Url;

use crate::protocol::operation::ReleasesOperation;

/// A request to the releases service
///
/// Wraps an operation with the context needed to execute it
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// The operation to execute
    pub operation: ReleasesOperation,

    /// Request context
    pub context: RequestContext,
}

impl ApiRequest {
    /// Create a new API request
    pub fn new(operation: ReleasesOperation, context: RequestContext) -> Self {
        Self { operation, context }
    }
}

/// Request context carrying per-call configuration
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Base URL the operation's endpoint path is appended to
    pub base_url: Url,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}
