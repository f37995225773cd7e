//! Contract layer - public API of the brand service
//!
//! This layer contains transport-agnostic models and errors.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::BrandError;
pub use model::Brand;
