//! Contract models for the brand service
//!
//! Transport-agnostic domain types. NO serde derives - wire shapes live in
//! the REST DTO layer.

/// A brand record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    /// Caller-assigned identifier, immutable for the lifetime of the record
    pub id: i32,
    /// Display name, no uniqueness constraint
    pub name: String,
}
