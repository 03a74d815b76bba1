//! Response decoding for the releases API

pub mod json;

pub use json::JsonCodec;

use crate::{
    protocol::{error::ReleasesError, operation::ReleasesOperation},
    service::response::ApiResponse,
};

/// Codec trait for decoding response bodies
///
/// All releases API requests are bodiless GETs, so a codec only decodes.
/// The operation is passed alongside the body to pick the expected shape.
pub trait Codec: Send + Sync {
    /// Deserialize a response body into a typed API response
    ///
    /// # Arguments
    ///
    /// * `body` - The response body bytes
    /// * `operation` - The originating operation (selects the target type)
    fn decode_response(
        &self,
        body: &[u8],
        operation: &ReleasesOperation,
    ) -> Result<ApiResponse, ReleasesError>;

    /// Get the content type this codec accepts
    fn content_type(&self) -> &str;
}
