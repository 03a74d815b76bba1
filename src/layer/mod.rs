//! Tower layers for the releases client stack

pub mod validation;

pub use validation::{ValidationLayer, ValidationService, MAX_LIMIT};
