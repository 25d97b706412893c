//! Handlers for `/api/flashcards`.
//!
//! Create and update resolve `categoryId` to a stored category before
//! anything is written; a missing or unknown id is a 400.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use flashcards_core::error::CoreError;
use flashcards_core::types::DbId;
use flashcards_db::mapper::{flashcard_to_dto, flashcard_to_entity};
use flashcards_db::models::category::Category;
use flashcards_db::models::flashcard::FlashcardDto;

use crate::error::{AppError, AppResult};
use crate::query::QuestionSearchParams;
use crate::state::AppState;

/// GET /api/flashcards
///
/// Loads every card with its category in one join so the list never issues
/// a per-card category query; the wire shape only carries `categoryId`.
pub async fn list_flashcards(State(state): State<AppState>) -> AppResult<Json<Vec<FlashcardDto>>> {
    let rows = state.flashcards.get_all().await?;

    Ok(Json(
        rows.iter()
            .map(|row| flashcard_to_dto(&row.flashcard))
            .collect(),
    ))
}

/// GET /api/flashcards/{id}
pub async fn get_flashcard(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FlashcardDto>> {
    state
        .flashcards
        .get_by_id(id)
        .await?
        .as_ref()
        .map(flashcard_to_dto)
        .map(Json)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Flashcard",
            id,
        }))
}

/// GET /api/flashcards/search?question=
pub async fn search_flashcards(
    State(state): State<AppState>,
    Query(params): Query<QuestionSearchParams>,
) -> AppResult<Json<Vec<FlashcardDto>>> {
    let found = state.flashcards.search_by_question(&params.question).await?;

    Ok(Json(found))
}

/// POST /api/flashcards
///
/// Any `id` in the body is discarded so the call always inserts.
pub async fn create_flashcard(
    State(state): State<AppState>,
    Json(input): Json<FlashcardDto>,
) -> AppResult<Json<FlashcardDto>> {
    let category = resolve_category(&state, input.category_id).await?;
    let entity = flashcard_to_entity(FlashcardDto { id: None, ..input }, &category);
    let saved = state.flashcards.create(entity).await?;

    tracing::info!(flashcard_id = ?saved.id, category_id = ?saved.category_id, "Flashcard created");

    Ok(Json(flashcard_to_dto(&saved)))
}

/// PUT /api/flashcards/{id}
pub async fn update_flashcard(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FlashcardDto>,
) -> AppResult<Json<FlashcardDto>> {
    let category = resolve_category(&state, input.category_id).await?;
    let updated = state
        .flashcards
        .update(id, flashcard_to_entity(input, &category))
        .await?;

    tracing::info!(flashcard_id = id, category_id = ?updated.category_id, "Flashcard updated");

    Ok(Json(flashcard_to_dto(&updated)))
}

/// DELETE /api/flashcards/{id}
///
/// Deleting an unknown id is a successful no-op.
pub async fn delete_flashcard(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existed = state.flashcards.delete(id).await?;

    tracing::info!(flashcard_id = id, existed, "Flashcard deleted");

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up the category a flashcard payload points at.
async fn resolve_category(state: &AppState, category_id: Option<DbId>) -> AppResult<Category> {
    let category_id =
        category_id.ok_or_else(|| AppError::BadRequest("categoryId is required".into()))?;

    state
        .categories
        .get_by_id(category_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Category with id {category_id} not found"
            )))
        })
}
