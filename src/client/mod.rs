//! High-level client API for the releases service

pub mod builder;
pub mod config;
pub mod releases;

pub use builder::ReleasesClientBuilder;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use releases::ReleasesClient;
