//! Repository for the `categories` table.

use flashcards_core::types::DbId;
use sqlx::PgPool;

use super::{like_pattern, FlashcardRepo};
use crate::models::category::Category;

/// Column list for categories queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id ascending.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID. The flashcard collection is not loaded.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category and attach the flashcards it owns.
    pub async fn find_by_id_with_flashcards(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let Some(category) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let cards = FlashcardRepo::find_by_category_id(pool, id).await?;
        Ok(Some(Category::with_flashcards(category.id, category.name, cards)))
    }

    /// Case-insensitive substring search on `name`.
    pub async fn find_by_name_containing_ignore_case(
        pool: &PgPool,
        name: &str,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE name ILIKE $1 ESCAPE '\\'
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(like_pattern(name))
            .fetch_all(pool)
            .await
    }

    /// Insert the category when it has no id, otherwise update that row.
    ///
    /// Runs in one transaction that also deletes cards removed from the
    /// collection and saves every attached card against the persisted id.
    /// The returned category carries the saved cards.
    pub async fn save(pool: &PgPool, category: Category) -> Result<Category, sqlx::Error> {
        let (id, name, flashcards, orphans) = category.into_parts();
        let mut tx = pool.begin().await?;

        let row = match id {
            None => {
                let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
                sqlx::query_as::<_, Category>(&query)
                    .bind(&name)
                    .fetch_one(&mut *tx)
                    .await?
            }
            Some(id) => {
                let query =
                    format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
                sqlx::query_as::<_, Category>(&query)
                    .bind(id)
                    .bind(&name)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        if !orphans.is_empty() {
            let result =
                sqlx::query("DELETE FROM flashcards WHERE id = ANY($1) AND category_id = $2")
                    .bind(&orphans)
                    .bind(row.id)
                    .execute(&mut *tx)
                    .await?;
            tracing::debug!(
                category_id = ?row.id,
                removed = result.rows_affected(),
                "Orphaned flashcards deleted",
            );
        }

        let mut saved = row;
        for mut card in flashcards {
            card.category_id = saved.id;
            let card = FlashcardRepo::save_with(&mut *tx, card).await?;
            saved.add_flashcard(card);
        }

        tx.commit().await?;
        Ok(saved)
    }

    /// Delete a category by ID. Owned flashcards go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
