//! Query parameter types for the search endpoints.

use serde::Deserialize;

/// `GET /api/categories/search?name=`
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    pub name: String,
}

/// `GET /api/flashcards/search?question=`
#[derive(Debug, Deserialize)]
pub struct QuestionSearchParams {
    pub question: String,
}
