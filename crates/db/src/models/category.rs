//! Category entity and DTO.

use flashcards_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::flashcard::Flashcard;

/// A row from the `categories` table plus the flashcards attached to it.
///
/// The collection can only be read through [`Category::flashcards`] and
/// changed through [`Category::add_flashcard`] / [`Category::remove_flashcard`],
/// which keep every card's `category_id` pointing at this category.
/// Rows loaded from the database start with an empty collection.
#[derive(Debug, Clone, Default, FromRow)]
pub struct Category {
    /// `None` until the row has been inserted.
    pub id: Option<DbId>,
    pub name: String,
    #[sqlx(skip)]
    flashcards: Vec<Flashcard>,
    /// Ids of persisted cards removed from the collection since the last save.
    #[sqlx(skip)]
    orphans: Vec<DbId>,
}

impl Category {
    /// A transient category with no flashcards.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a category that owns `flashcards`.
    ///
    /// Each card goes through [`Category::add_flashcard`], so its
    /// `category_id` is overwritten with `id`.
    pub fn with_flashcards(
        id: Option<DbId>,
        name: impl Into<String>,
        flashcards: impl IntoIterator<Item = Flashcard>,
    ) -> Self {
        let mut category = Self {
            id,
            name: name.into(),
            ..Self::default()
        };
        for card in flashcards {
            category.add_flashcard(card);
        }
        category
    }

    /// Read-only view of the attached flashcards.
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    /// Ids that the next save will delete.
    pub fn orphans(&self) -> &[DbId] {
        &self.orphans
    }

    /// Attach a card and point it at this category. Duplicates are kept.
    ///
    /// Re-attaching a previously removed card cancels its pending deletion.
    pub fn add_flashcard(&mut self, mut flashcard: Flashcard) {
        if let Some(id) = flashcard.id {
            self.orphans.retain(|orphan| *orphan != id);
        }
        flashcard.category_id = self.id;
        self.flashcards.push(flashcard);
    }

    /// Detach the first card matching `flashcard` and clear its category.
    ///
    /// Persisted cards match by id, transient ones by question and answer.
    /// Returns `None` when nothing matched.
    pub fn remove_flashcard(&mut self, flashcard: &Flashcard) -> Option<Flashcard> {
        let pos = self
            .flashcards
            .iter()
            .position(|card| card.is_same_card(flashcard))?;

        let mut removed = self.flashcards.remove(pos);
        removed.category_id = None;
        if let Some(id) = removed.id {
            self.orphans.push(id);
        }
        Some(removed)
    }

    /// Split into scalar fields, attached cards and pending orphan ids.
    pub(crate) fn into_parts(self) -> (Option<DbId>, String, Vec<Flashcard>, Vec<DbId>) {
        (self.id, self.name, self.flashcards, self.orphans)
    }
}

/// Wire shape of a category. Never carries the flashcard collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<DbId>,
    pub name: String,
}
