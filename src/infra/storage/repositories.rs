//! SeaORM repository implementation

use crate::contract::Brand;
use crate::domain::repository::BrandRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmBrandRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBrandRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandRepository for SeaOrmBrandRepository {
    async fn insert(&self, brand: &Brand) -> Result<Brand> {
        let active: entity::ActiveModel = brand.into();

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Brand>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<Brand>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, brand: &Brand) -> Result<Brand> {
        let active: entity::ActiveModel = brand.into();

        let result = entity::Entity::update(active).exec(&*self.db).await?;

        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        entity::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }
}
