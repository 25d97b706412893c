//! Management endpoints mounted at `/actuator`.
//!
//! `health` and `info` are public; everything else requires the admin.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `UP` when every dependency is reachable, `DOWN` otherwise.
    pub status: &'static str,
    /// Database reachability.
    pub db: &'static str,
}

/// Build information payload.
#[derive(Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Sanitized view of the running configuration. Never includes the hash.
#[derive(Serialize)]
pub struct ConfigResponse {
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub static_dir: String,
    pub admin_username: String,
}

/// GET /actuator/health -- 200 when up, 503 when the database is unreachable.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match flashcards_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "UP",
                db: "UP",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "DOWN",
                    db: "DOWN",
                }),
            )
        }
    }
}

/// GET /actuator/info
async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /actuator/config (admin only)
async fn config(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<ConfigResponse> {
    tracing::info!(admin = %admin.username, "Configuration inspected");

    let config = &state.config;
    Json(ConfigResponse {
        host: config.host.clone(),
        port: config.port,
        db_max_connections: config.db_max_connections,
        cors_origins: config.cors_origins.clone(),
        request_timeout_secs: config.request_timeout_secs,
        static_dir: config.static_dir.clone(),
        admin_username: config.admin.username.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/config", get(config))
}
