//! HTTP request handlers - thin layer that delegates to the domain service

use crate::domain::Service;
use super::{dto::BrandDto, error::{map_domain_error, Problem}};
use axum::{
    extract::Path,
    http::{header, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

/// List all brands
pub async fn list_brands(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<BrandDto>>, Problem> {
    let brands = service.list_brands().await.map_err(map_domain_error)?;

    Ok(Json(brands.into_iter().map(|b| b.into()).collect()))
}

/// Create a brand with a caller-assigned identifier
pub async fn create_brand(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<BrandDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<BrandDto>), Problem> {
    let brand = service
        .create_brand(req.into())
        .await
        .map_err(map_domain_error)?;

    let location = format!("/brands/{}", brand.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(brand.into()),
    ))
}

/// Update an existing brand
pub async fn update_brand(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<BrandDto>,
) -> Result<StatusCode, Problem> {
    service
        .update_brand(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a brand
pub async fn delete_brand(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_brand(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
