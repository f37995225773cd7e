//! Domain service - brand CRUD orchestration

use crate::contract::{Brand, BrandError};
use super::repository::BrandRepository;
use std::sync::Arc;

/// Domain service for brand management
pub struct Service {
    brands: Arc<dyn BrandRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(brands: Arc<dyn BrandRepository>) -> Self {
        Self { brands }
    }

    /// List all brands
    pub async fn list_brands(&self) -> Result<Vec<Brand>, BrandError> {
        self.brands.list_all().await.map_err(internal)
    }

    /// Create a brand with a caller-assigned identifier
    pub async fn create_brand(&self, brand: Brand) -> Result<Brand, BrandError> {
        self.brands.insert(&brand).await.map_err(internal)
    }

    /// Update the name of an existing brand
    ///
    /// A body identifier that disagrees with the path identifier is rejected
    /// rather than ignored.
    pub async fn update_brand(&self, id: i32, brand: Brand) -> Result<(), BrandError> {
        if brand.id != id {
            return Err(BrandError::IdMismatch {
                path_id: id,
                body_id: brand.id,
            });
        }

        self.brands
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(BrandError::NotFound { id })?;

        self.brands.update(&brand).await.map_err(internal)?;
        Ok(())
    }

    /// Delete a brand by identifier
    pub async fn delete_brand(&self, id: i32) -> Result<(), BrandError> {
        self.brands
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(BrandError::NotFound { id })?;

        self.brands.delete(id).await.map_err(internal)?;
        Ok(())
    }
}

fn internal(error: anyhow::Error) -> BrandError {
    tracing::error!("repository error: {:?}", error);
    BrandError::Internal
}
