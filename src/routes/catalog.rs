//! Built-in pattern catalog route.

use axum::Json;

use crate::errors::ApiResponse;
use crate::services::catalog::{self, CatalogEntry};

/// GET /api/v1/catalog — the built-in popular patterns, in display order.
pub async fn list() -> Json<ApiResponse<&'static [CatalogEntry]>> {
    ApiResponse::success(catalog::entries())
}
