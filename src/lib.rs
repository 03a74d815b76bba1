//! # HashiCorp Releases
//!
//! A typed async client for the HashiCorp Releases metadata API
//! (`https://api.releases.hashicorp.com/v1`).
//!
//! The API exposes three read-only operations: listing product names,
//! listing the releases of a product (paginated, newest first), and
//! fetching the full metadata of a single release.
//!
//! ## Features
//!
//! - **Typed responses**: releases, builds and statuses decode into plain
//!   value objects
//! - **Pluggable transport**: bring your own `reqwest::Client` or swap the
//!   whole transport behind a trait
//! - **Early validation**: bad parameters fail before a request is sent
//! - **Structured errors**: every failure names the operation that caused it
//!
//! ## Example
//!
//! ```rust,no_run
//! use hashicorp_releases::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = ReleasesClientBuilder::new_http().build()?;
//!
//!     let params = ListReleasesParams::new().with_limit(5);
//!     for release in client.list_releases("vault", Some(params)).await? {
//!         println!("{} ({})", release.version, release.timestamp_created);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod codec;
pub mod layer;
pub mod protocol;
pub mod service;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        client::{ReleasesClient, ReleasesClientBuilder},
        protocol::error::{ReleasesError, ReleasesResult},
        protocol::{
            Build, LicenseClass, ListReleasesParams, Release, SpecificReleaseParams, Status,
        },
    };
}
