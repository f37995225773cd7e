//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::BrandRepository;
pub use service::Service;
