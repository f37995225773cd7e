//! Integration tests for the brand domain service

use brand_service::contract::{Brand, BrandError};
use brand_service::domain::Service;
use std::sync::Arc;

// Mock repository implementation for testing
pub mod mocks {
    use async_trait::async_trait;
    use brand_service::contract::Brand;
    use brand_service::domain::repository::BrandRepository;
    use parking_lot::RwLock;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    pub struct MockBrandRepo {
        data: Arc<RwLock<HashMap<i32, Brand>>>,
    }

    impl MockBrandRepo {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get count of stored brands
        pub fn count(&self) -> usize {
            self.data.read().len()
        }

        /// Get a stored brand by id
        pub fn get(&self, id: i32) -> Option<Brand> {
            self.data.read().get(&id).cloned()
        }
    }

    #[async_trait]
    impl BrandRepository for MockBrandRepo {
        async fn insert(&self, brand: &Brand) -> anyhow::Result<Brand> {
            self.data.write().insert(brand.id, brand.clone());
            Ok(brand.clone())
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Brand>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn list_all(&self) -> anyhow::Result<Vec<Brand>> {
            let mut brands: Vec<Brand> = self.data.read().values().cloned().collect();
            brands.sort_by_key(|b| b.id);
            Ok(brands)
        }

        async fn update(&self, brand: &Brand) -> anyhow::Result<Brand> {
            self.data.write().insert(brand.id, brand.clone());
            Ok(brand.clone())
        }

        async fn delete(&self, id: i32) -> anyhow::Result<()> {
            self.data.write().remove(&id);
            Ok(())
        }
    }
}

use mocks::MockBrandRepo;

fn brand(id: i32, name: &str) -> Brand {
    Brand {
        id,
        name: name.to_string(),
    }
}

#[tokio::test]
async fn list_returns_all_inserted_brands() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));

    service.create_brand(brand(1, "Brand 1")).await.unwrap();
    service.create_brand(brand(2, "Brand 2")).await.unwrap();

    let brands = service.list_brands().await.unwrap();
    assert_eq!(brands.len(), 2);
    assert!(brands.contains(&brand(1, "Brand 1")));
    assert!(brands.contains(&brand(2, "Brand 2")));
}

#[tokio::test]
async fn list_of_empty_store_succeeds() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo));

    let brands = service.list_brands().await.unwrap();
    assert!(brands.is_empty());
}

#[tokio::test]
async fn create_echoes_the_created_brand() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));

    let created = service.create_brand(brand(1, "Brand 1")).await.unwrap();

    assert_eq!(created, brand(1, "Brand 1"));
    assert_eq!(repo.get(1), Some(brand(1, "Brand 1")));
}

#[tokio::test]
async fn update_changes_name_and_keeps_id() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));
    service.create_brand(brand(1, "Brand 1")).await.unwrap();

    service
        .update_brand(1, brand(1, "Updated Brand 1"))
        .await
        .unwrap();

    let stored = repo.get(1).unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.name, "Updated Brand 1");
}

#[tokio::test]
async fn update_of_missing_brand_fails_without_mutation() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));

    let result = service.update_brand(1, brand(1, "Updated Brand 1")).await;

    assert_eq!(result, Err(BrandError::NotFound { id: 1 }));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn update_rejects_mismatched_body_id() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));
    service.create_brand(brand(1, "Brand 1")).await.unwrap();

    let result = service.update_brand(1, brand(2, "Updated Brand 1")).await;

    assert_eq!(
        result,
        Err(BrandError::IdMismatch {
            path_id: 1,
            body_id: 2
        })
    );
    assert_eq!(repo.get(1), Some(brand(1, "Brand 1")));
}

#[tokio::test]
async fn delete_removes_the_brand() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));
    service.create_brand(brand(1, "Brand 1")).await.unwrap();

    service.delete_brand(1).await.unwrap();

    assert_eq!(repo.get(1), None);
}

#[tokio::test]
async fn delete_of_missing_brand_fails_and_leaves_store_unchanged() {
    let repo = MockBrandRepo::new();
    let service = Service::new(Arc::new(repo.clone()));
    service.create_brand(brand(2, "Brand 2")).await.unwrap();

    let result = service.delete_brand(1).await;

    assert_eq!(result, Err(BrandError::NotFound { id: 1 }));
    assert_eq!(repo.count(), 1);
}
