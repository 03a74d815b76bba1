//! Error types for releases API operations

use thiserror::Error;

/// Main error type for releases API operations
///
/// Every failure that happens past parameter validation is tagged with the
/// name of the logical operation that produced it, so callers can tell which
/// call failed without inspecting the URL.
#[derive(Debug, Error)]
pub enum ReleasesError {
    /// A caller-supplied parameter failed a precondition check; no request
    /// was sent
    #[error("validation error: {0}")]
    Validation(String),

    /// The server answered with a non-200 status
    #[error("{operation}: response {status} url {url}")]
    Http {
        /// Logical operation that issued the request
        operation: &'static str,

        /// Numeric status code as a string (e.g. "404")
        status: String,

        /// Exact request URL, including the query string
        url: String,
    },

    /// The server could not be reached
    #[error("{operation}: transport error: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// The response body was not valid JSON or did not match the documented
    /// schema
    #[error("{operation}: decode error: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The transport's configured timeout elapsed before a response arrived
    #[error("{operation}: request timeout")]
    Timeout { operation: &'static str },

    /// The decoded response was not the kind expected for the operation
    #[error("{operation}: unexpected response kind")]
    UnexpectedResponse { operation: &'static str },
}

/// Result type alias for releases API operations
pub type ReleasesResult<T> = Result<T, ReleasesError>;
