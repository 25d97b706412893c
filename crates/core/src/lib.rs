//! Shared primitives for the flashcards backend: identifier types and the
//! domain error enum used by the repository and service layers.

pub mod error;
pub mod types;
