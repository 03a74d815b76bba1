//! Protocol types for the releases API

pub mod error;
pub mod operation;
pub mod release;

pub use error::{ReleasesError, ReleasesResult};
pub use operation::ReleasesOperation;
pub use release::{
    Build, LicenseClass, ListReleasesParams, Release, SpecificReleaseParams, Status,
};
