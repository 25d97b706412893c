pub mod category;
pub mod flashcard;
