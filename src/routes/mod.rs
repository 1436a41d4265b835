//! Route definitions for the regexlab API.

pub mod catalog;
pub mod evaluate;
pub mod health;
pub mod patterns;
pub mod snippets;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::AppState;

/// Build the full application router. Shared between `main.rs` and the
/// integration tests so both serve the same surface.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/evaluate", post(evaluate::evaluate))
        .route("/patterns", get(patterns::list))
        .route("/patterns", post(patterns::create))
        .route("/patterns/{id}", delete(patterns::delete))
        .route("/snippets", post(snippets::generate))
        .route("/catalog", get(catalog::list));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api/v1", api)
        .with_state(state)
}
