use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Discovery payload served at `/`.
#[derive(Serialize)]
pub struct DiscoveryResponse {
    pub title: &'static str,
    /// `UP | Port: <port>`.
    pub status: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub url: String,
    pub description: &'static str,
}

/// GET / -- application name, status and the primary endpoint URLs.
async fn discovery(State(state): State<AppState>) -> Json<DiscoveryResponse> {
    let port = state.config.port;
    let base_url = format!("http://localhost:{port}");

    let endpoints = [
        ("/api/categories", "List all categories"),
        ("/api/flashcards", "List all flashcards"),
        ("/actuator/health", "Database status and liveness"),
    ]
    .into_iter()
    .map(|(path, description)| EndpointInfo {
        url: format!("{base_url}{path}"),
        description,
    })
    .collect();

    Json(DiscoveryResponse {
        title: "Flashcards REST API",
        status: format!("UP | Port: {port}"),
        endpoints,
    })
}

/// Mount the discovery route (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(discovery))
}
