//! Domain entities and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` + `Deserialize` DTO carrying the JSON wire shape

pub mod category;
pub mod flashcard;
