//! Saved pattern routes: list, create, delete.

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::models::saved_pattern::{CreateSavedPattern, SavedPattern};
use crate::AppState;

/// GET /api/v1/patterns — all saved patterns in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<SavedPattern>>> {
    ApiResponse::success(state.store.list())
}

/// POST /api/v1/patterns — save a new pattern.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateSavedPattern>,
) -> Result<Json<ApiResponse<SavedPattern>>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = state.store.create(&body)?;
    Ok(ApiResponse::success(record))
}

/// DELETE /api/v1/patterns/{id} — remove a saved pattern. Deleting an id
/// that does not exist succeeds without effect.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.store.delete(&id)?;
    Ok(ApiResponse::success(()))
}
