//! Client builder assembling the transport, codec and validation stack

use std::sync::Arc;

use url::Url;

use crate::{
    client::{config::ClientConfig, ReleasesClient},
    codec::{Codec, JsonCodec},
    layer::{ValidationLayer, ValidationService},
    protocol::error::ReleasesError,
    service::ReleasesService,
    transport::{HttpTransport, Transport},
};
use tower_layer::Layer;

/// Builder for constructing releases clients
///
/// # Example
///
/// ```rust,no_run
/// use hashicorp_releases::prelude::*;
///
/// # async fn example() -> Result<(), ReleasesError> {
/// let mut client = ReleasesClientBuilder::new_http().build()?;
///
/// let products = client.list_product_names().await?;
/// println!("{} products", products.len());
/// # Ok(())
/// # }
/// ```
///
/// # Compiler Error
///
/// This will fail to compile if it is not clear to the compiler which type
/// implementing `Transport` backs the builder. This is expected behaviour.
///
/// ```compile_fail
/// let client = ReleasesClientBuilder::new(base_url()).build();
/// ```
pub struct ReleasesClientBuilder<T: Transport> {
    base_url: Url,
    transport: Option<T>,
    codec: Option<Arc<dyn Codec>>,
}

impl<T: Transport> ReleasesClientBuilder<T> {
    /// Create a builder against a custom base URL with no transport yet
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL endpoint paths are appended to
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            transport: None,
            codec: None,
        }
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom codec
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Build the releases client
    ///
    /// # Errors
    ///
    /// Returns an error if no transport has been configured
    pub fn build(
        self,
    ) -> Result<ReleasesClient<ValidationService<ReleasesService<T>>>, ReleasesError> {
        let transport = self.transport.ok_or_else(|| {
            ReleasesError::Validation(
                "transport not configured; call new_http() or with_transport()".into(),
            )
        })?;

        let codec = self.codec.unwrap_or_else(|| Arc::new(JsonCodec));

        let service = ReleasesService::new(transport, codec);
        let service = ValidationLayer::new().layer(service);

        let config = ClientConfig::new(self.base_url);

        Ok(ReleasesClient::new(service, config))
    }
}

impl ReleasesClientBuilder<HttpTransport> {
    /// Create a builder with HTTP transport against the production endpoint
    pub fn new_http() -> Self {
        Self::new_http_at(ClientConfig::default_base_url())
    }

    /// Create a builder with HTTP transport against a custom base URL
    ///
    /// Useful for pointing the client at a staging or test server.
    pub fn new_http_at(base_url: Url) -> Self {
        Self {
            base_url,
            transport: Some(HttpTransport::new()),
            codec: Some(Arc::new(JsonCodec)),
        }
    }

    /// Use a caller-supplied reqwest client for the HTTP transport
    ///
    /// The supplied client's timeout, proxy and TLS settings govern every
    /// request this releases client sends.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(HttpTransport::with_client(client));
        self
    }
}
