//! Pattern evaluation route.

use axum::Json;

use crate::errors::ApiResponse;
use crate::models::evaluation::{EvaluateRequest, EvaluationResult};
use crate::services::evaluator;

/// POST /api/v1/evaluate — run a pattern against a subject text.
///
/// Compile failures come back inside the result (`valid = false`), not as an
/// HTTP error; a malformed pattern is normal input for this tool.
pub async fn evaluate(Json(body): Json<EvaluateRequest>) -> Json<ApiResponse<EvaluationResult>> {
    ApiResponse::success(evaluator::evaluate(&body.pattern, &body.flags, &body.subject))
}
