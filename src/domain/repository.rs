//! Repository trait for data access
//!
//! Defines the interface for brand storage operations.
//! The SeaORM implementation is in infra/storage/repositories.rs

use crate::contract::Brand;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for brand records
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Insert a new brand
    async fn insert(&self, brand: &Brand) -> Result<Brand>;

    /// Find a brand by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Brand>>;

    /// List all brands
    async fn list_all(&self) -> Result<Vec<Brand>>;

    /// Update an existing brand
    async fn update(&self, brand: &Brand) -> Result<Brand>;

    /// Delete a brand by identifier
    async fn delete(&self, id: i32) -> Result<()>;
}
