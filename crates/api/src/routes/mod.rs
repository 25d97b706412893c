pub mod actuator;
pub mod category;
pub mod flashcard;
pub mod root;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree. Every route here is public.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list, create
/// /categories/search?name=    substring search
/// /categories/{id}            get, update, delete
///
/// /flashcards                 list, create
/// /flashcards/search?question= substring search
/// /flashcards/{id}            get, update, delete
/// ```
///
/// Unmatched `/api` paths answer 404 without asking for credentials.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/flashcards", flashcard::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "No such API endpoint",
            "code": "NOT_FOUND",
        })),
    )
}
