//! HTTP-level integration tests for `/api/categories`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", json!({ "name": "Science" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Science");
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "id": id, "name": "Science" }));

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        json!({ "name": "Biology" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "id": id, "name": "Biology" }));

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories(pool: PgPool) {
    create_category(&pool, "Science").await;
    create_category(&pool, "History").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Science"));
    assert!(names.contains(&"History"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_ignores_client_id(pool: PgPool) {
    let existing = create_category(&pool, "Science").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/categories",
        json!({ "id": existing, "name": "History" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_ne!(created["id"].as_i64().unwrap(), existing);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{existing}")).await;
    assert_eq!(body_json(response).await["name"], "Science");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_categories_ignores_case(pool: PgPool) {
    create_category(&pool, "Science").await;
    create_category(&pool, "History").await;

    for fragment in ["scie", "SCIE"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/categories/search?name={fragment}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let results = json.as_array().unwrap();
        assert_eq!(results.len(), 1, "fragment {fragment}");
        assert_eq!(results[0]["name"], "Science");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_name_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/categories/999999", json!({ "name": "Ghost" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_category_is_ok(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/categories/999999").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category_removes_its_flashcards(pool: PgPool) {
    let category_id = create_category(&pool, "Geography").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/flashcards",
        json!({ "question": "Capital of France?", "answer": "Paris", "categoryId": category_id }),
    )
    .await;
    let card_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/flashcards/{card_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_without_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/categories", json!({})).await;
    assert!(response.status().is_client_error());
}
