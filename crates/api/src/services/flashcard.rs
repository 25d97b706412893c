use flashcards_core::error::CoreError;
use flashcards_core::types::DbId;
use flashcards_db::mapper::flashcard_to_dto;
use flashcards_db::models::flashcard::{Flashcard, FlashcardDto, FlashcardWithCategory};
use flashcards_db::repositories::FlashcardRepo;
use flashcards_db::DbPool;

use crate::error::{AppError, AppResult};

/// Business operations on flashcards.
#[derive(Clone)]
pub struct FlashcardService {
    pool: DbPool,
}

impl FlashcardService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Every flashcard with its category, fetched in one round trip.
    pub async fn get_all(&self) -> AppResult<Vec<FlashcardWithCategory>> {
        Ok(FlashcardRepo::find_all_with_category(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<Flashcard>> {
        Ok(FlashcardRepo::find_by_id(&self.pool, id).await?)
    }

    /// Case-insensitive substring search, already mapped to DTOs.
    pub async fn search_by_question(&self, question: &str) -> AppResult<Vec<FlashcardDto>> {
        let cards =
            FlashcardRepo::find_by_question_containing_ignore_case(&self.pool, question).await?;
        Ok(cards.iter().map(flashcard_to_dto).collect())
    }

    pub async fn create(&self, flashcard: Flashcard) -> AppResult<Flashcard> {
        Ok(FlashcardRepo::save(&self.pool, flashcard).await?)
    }

    /// Replace question, answer and category of flashcard `id`.
    /// The id inside `flashcard` is ignored.
    pub async fn update(&self, id: DbId, flashcard: Flashcard) -> AppResult<Flashcard> {
        let mut existing = FlashcardRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Flashcard",
                id,
            }))?;

        existing.question = flashcard.question;
        existing.answer = flashcard.answer;
        existing.category_id = flashcard.category_id;
        Ok(FlashcardRepo::save(&self.pool, existing).await?)
    }

    /// Delete without an existence check. Returns whether a row was removed.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        Ok(FlashcardRepo::delete_by_id(&self.pool, id).await?)
    }
}
