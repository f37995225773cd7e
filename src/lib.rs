//! Brand Service
//!
//! Minimal CRUD service for brand records: list, create, update and delete
//! over a relational store.

// Public exports
pub mod contract;
pub use contract::{Brand, BrandError};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
