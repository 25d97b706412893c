//! Handlers for `/api/categories`.
//!
//! Every endpoint is public. Successful calls answer 200 with a bare
//! [`CategoryDto`] (or a list of them); DELETE answers 200 with no body.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use flashcards_core::error::CoreError;
use flashcards_core::types::DbId;
use flashcards_db::mapper::{category_to_dto, category_to_entity};
use flashcards_db::models::category::CategoryDto;

use crate::error::{AppError, AppResult};
use crate::query::NameSearchParams;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryDto>>> {
    let categories = state.categories.get_all().await?;

    Ok(Json(categories.iter().map(category_to_dto).collect()))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoryDto>> {
    state
        .categories
        .get_by_id(id)
        .await?
        .as_ref()
        .map(category_to_dto)
        .map(Json)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
}

/// GET /api/categories/search?name=
///
/// Case-insensitive substring match. Always a list, possibly empty.
pub async fn search_categories(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<Json<Vec<CategoryDto>>> {
    let found = state.categories.search_by_name(&params.name).await?;

    Ok(Json(found))
}

/// POST /api/categories
///
/// Any `id` in the body is discarded so the call always inserts.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CategoryDto>,
) -> AppResult<Json<CategoryDto>> {
    let entity = category_to_entity(CategoryDto { id: None, ..input });
    let saved = state.categories.create(entity).await?;

    tracing::info!(category_id = ?saved.id, name = %saved.name, "Category created");

    Ok(Json(category_to_dto(&saved)))
}

/// PUT /api/categories/{id}
///
/// The target row comes from the path, never from the body.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CategoryDto>,
) -> AppResult<Json<CategoryDto>> {
    let updated = state
        .categories
        .update(id, category_to_entity(input))
        .await?;

    tracing::info!(category_id = id, name = %updated.name, "Category updated");

    Ok(Json(category_to_dto(&updated)))
}

/// DELETE /api/categories/{id}
///
/// Deleting an unknown id is a successful no-op. Owned flashcards are
/// deleted with the category.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existed = state.categories.delete(id).await?;

    tracing::info!(category_id = id, existed, "Category deleted");

    Ok(StatusCode::OK)
}
