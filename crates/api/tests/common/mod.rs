#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use flashcards_api::auth::basic::BasicCredentials;
use flashcards_api::auth::password::hash_password;
use flashcards_api::config::{AdminConfig, ServerConfig};
use flashcards_api::router::build_app_router;
use flashcards_api::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-password";

/// Build a test `ServerConfig` with safe defaults.
///
/// Static files come from `tests/fixtures/static`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/static").to_string(),
        admin: AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

pub fn admin_auth_header() -> String {
    basic_auth_header(ADMIN_USERNAME, ADMIN_PASSWORD)
}

pub fn basic_auth_header(username: &str, password: &str) -> String {
    BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
    .to_header_value()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_auth(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::put(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
