//! Flashcard entity and DTO.

use flashcards_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `flashcards` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Flashcard {
    /// `None` until the row has been inserted.
    pub id: Option<DbId>,
    pub question: String,
    pub answer: String,
    /// Owning category. Required by the schema; `None` only on detached cards.
    pub category_id: Option<DbId>,
}

impl Flashcard {
    /// A transient, unattached flashcard.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer: answer.into(),
            category_id: None,
        }
    }

    pub(crate) fn is_same_card(&self, other: &Flashcard) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.question == other.question && self.answer == other.answer,
            _ => false,
        }
    }
}

/// A flashcard joined with the name of its category in one query.
#[derive(Debug, Clone, FromRow)]
pub struct FlashcardWithCategory {
    #[sqlx(flatten)]
    pub flashcard: Flashcard,
    pub category_name: String,
}

/// Wire shape of a flashcard: the category is flattened to its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardDto {
    pub id: Option<DbId>,
    pub question: String,
    pub answer: String,
    pub category_id: Option<DbId>,
}
