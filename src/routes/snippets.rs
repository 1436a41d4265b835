//! Snippet generation route.

use axum::Json;

use crate::errors::{ApiResponse, AppError};
use crate::services::snippets::{self, Snippet, SnippetRequest};

/// POST /api/v1/snippets — render an equivalent snippet in a target language.
pub async fn generate(
    Json(body): Json<SnippetRequest>,
) -> Result<Json<ApiResponse<Snippet>>, AppError> {
    let snippet = snippets::generate(body.language, &body.pattern, &body.flags)?;
    Ok(ApiResponse::success(snippet))
}
