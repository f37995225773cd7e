//! Route registration

use crate::domain::Service;
use super::handlers;
use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the brand router with the service attached as an extension
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/brands",
            get(handlers::list_brands).post(handlers::create_brand),
        )
        .route(
            "/brands/{id}",
            put(handlers::update_brand).delete(handlers::delete_brand),
        )
        .layer(Extension(service))
}
