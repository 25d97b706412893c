//! Repository for the `flashcards` table.

use flashcards_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use super::like_pattern;
use crate::models::flashcard::{Flashcard, FlashcardWithCategory};

/// Column list for flashcards queries.
const COLUMNS: &str = "id, question, answer, category_id";

/// Provides CRUD operations for flashcards.
pub struct FlashcardRepo;

impl FlashcardRepo {
    /// List all flashcards, ordered by id ascending.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards ORDER BY id ASC");
        sqlx::query_as::<_, Flashcard>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all flashcards together with their category in a single join.
    pub async fn find_all_with_category(
        pool: &PgPool,
    ) -> Result<Vec<FlashcardWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, FlashcardWithCategory>(
            "SELECT f.id, f.question, f.answer, f.category_id, c.name AS category_name
             FROM flashcards f
             JOIN categories c ON c.id = f.category_id
             ORDER BY f.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a flashcard by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE id = $1");
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the flashcards owned by a category.
    pub async fn find_by_category_id(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE category_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on `question`.
    pub async fn find_by_question_containing_ignore_case(
        pool: &PgPool,
        question: &str,
    ) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM flashcards
             WHERE question ILIKE $1 ESCAPE '\\'
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(like_pattern(question))
            .fetch_all(pool)
            .await
    }

    /// Insert the flashcard when it has no id, otherwise update that row.
    ///
    /// Updating an id with no row fails with `RowNotFound`; a missing or
    /// unknown `category_id` surfaces as the database constraint error.
    pub async fn save(pool: &PgPool, flashcard: Flashcard) -> Result<Flashcard, sqlx::Error> {
        Self::save_with(pool, flashcard).await
    }

    pub(crate) async fn save_with<'e, E>(
        executor: E,
        flashcard: Flashcard,
    ) -> Result<Flashcard, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        match flashcard.id {
            None => {
                let query = format!(
                    "INSERT INTO flashcards (question, answer, category_id)
                     VALUES ($1, $2, $3)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Flashcard>(&query)
                    .bind(&flashcard.question)
                    .bind(&flashcard.answer)
                    .bind(flashcard.category_id)
                    .fetch_one(executor)
                    .await
            }
            Some(id) => {
                let query = format!(
                    "UPDATE flashcards SET
                        question = $2,
                        answer = $3,
                        category_id = $4
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Flashcard>(&query)
                    .bind(id)
                    .bind(&flashcard.question)
                    .bind(&flashcard.answer)
                    .bind(flashcard.category_id)
                    .fetch_one(executor)
                    .await
            }
        }
    }

    /// Delete a flashcard by ID. Returns `true` if a row was deleted.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flashcards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
