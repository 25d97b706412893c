//! Service layer.
//!
//! Services merge update payloads onto the stored row and report a missing
//! update target as [`CoreError::NotFound`]. Each service owns a pool handle
//! and is built once in [`AppState::new`](crate::state::AppState::new).
//!
//! [`CoreError::NotFound`]: flashcards_core::error::CoreError::NotFound

pub mod category;
pub mod flashcard;

pub use category::CategoryService;
pub use flashcard::FlashcardService;
