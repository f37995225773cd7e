//! Contract error types for the brand service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! HTTP statuses.

/// Brand service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandError {
    /// No brand exists with the requested identifier
    NotFound {
        /// Requested brand identifier
        id: i32,
    },
    /// Path identifier and body identifier disagree on update
    IdMismatch {
        /// Identifier from the request path
        path_id: i32,
        /// Identifier carried in the request body
        body_id: i32,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for BrandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => {
                write!(f, "brand not found: {}", id)
            }
            Self::IdMismatch { path_id, body_id } => {
                write!(f, "id mismatch: path {} vs body {}", path_id, body_id)
            }
            Self::Internal => {
                write!(f, "internal error")
            }
        }
    }
}

impl std::error::Error for BrandError {}
