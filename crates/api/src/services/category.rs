use flashcards_core::error::CoreError;
use flashcards_core::types::DbId;
use flashcards_db::mapper::category_to_dto;
use flashcards_db::models::category::{Category, CategoryDto};
use flashcards_db::repositories::CategoryRepo;
use flashcards_db::DbPool;

use crate::error::{AppError, AppResult};

/// Business operations on categories.
#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Category>> {
        Ok(CategoryRepo::find_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<Category>> {
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    /// Case-insensitive substring search, already mapped to DTOs.
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<CategoryDto>> {
        let categories = CategoryRepo::find_by_name_containing_ignore_case(&self.pool, name).await?;
        Ok(categories.iter().map(category_to_dto).collect())
    }

    pub async fn create(&self, category: Category) -> AppResult<Category> {
        Ok(CategoryRepo::save(&self.pool, category).await?)
    }

    /// Replace the name of category `id`. The id inside `category` is ignored.
    pub async fn update(&self, id: DbId, category: Category) -> AppResult<Category> {
        let mut existing = CategoryRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            }))?;

        existing.name = category.name;
        Ok(CategoryRepo::save(&self.pool, existing).await?)
    }

    /// Delete without an existence check. Returns whether a row was removed.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        Ok(CategoryRepo::delete_by_id(&self.pool, id).await?)
    }
}
