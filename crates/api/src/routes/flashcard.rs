//! Route definitions for flashcards, mounted at `/api/flashcards`.

use axum::routing::get;
use axum::Router;

use crate::handlers::flashcard;
use crate::state::AppState;

/// ```text
/// GET    /            -> list_flashcards
/// POST   /            -> create_flashcard
/// GET    /search      -> search_flashcards
/// GET    /{id}        -> get_flashcard
/// PUT    /{id}        -> update_flashcard
/// DELETE /{id}        -> delete_flashcard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(flashcard::list_flashcards).post(flashcard::create_flashcard),
        )
        .route("/search", get(flashcard::search_flashcards))
        .route(
            "/{id}",
            get(flashcard::get_flashcard)
                .put(flashcard::update_flashcard)
                .delete(flashcard::delete_flashcard),
        )
}
