//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod flashcard_repo;

pub use category_repo::CategoryRepo;
pub use flashcard_repo::FlashcardRepo;

/// Build an `ILIKE ... ESCAPE '\'` pattern that matches `fragment` literally
/// anywhere in the column.
pub(crate) fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
