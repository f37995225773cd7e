//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Brand wire representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    /// Caller-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    /// Brand name
    #[schema(example = "Brand 1")]
    pub name: String,
}
