//! Entity <-> DTO conversion.
//!
//! All functions are pure. A missing input is an `Option::None` at the call
//! site; `opt.map(category_to_dto)` yields `None` without any special casing.

use crate::models::category::{Category, CategoryDto};
use crate::models::flashcard::{Flashcard, FlashcardDto};

pub fn category_to_dto(category: &Category) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name.clone(),
    }
}

pub fn category_to_entity(dto: CategoryDto) -> Category {
    let mut category = Category::new(dto.name);
    category.id = dto.id;
    category
}

/// A card without a category maps to `categoryId: null`.
pub fn flashcard_to_dto(flashcard: &Flashcard) -> FlashcardDto {
    FlashcardDto {
        id: flashcard.id,
        question: flashcard.question.clone(),
        answer: flashcard.answer.clone(),
        category_id: flashcard.category_id,
    }
}

/// Build a flashcard owned by an already-resolved `category`.
///
/// The dto's own `category_id` is not consulted; lookup is the caller's job.
pub fn flashcard_to_entity(dto: FlashcardDto, category: &Category) -> Flashcard {
    Flashcard {
        id: dto.id,
        question: dto.question,
        answer: dto.answer,
        category_id: category.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trip_preserves_fields() {
        let dto = CategoryDto {
            id: Some(4),
            name: "Science".into(),
        };
        assert_eq!(category_to_dto(&category_to_entity(dto.clone())), dto);
    }

    #[test]
    fn transient_category_keeps_null_id() {
        let dto = CategoryDto {
            id: None,
            name: "New".into(),
        };
        let entity = category_to_entity(dto);
        assert_eq!(entity.id, None);
        assert!(entity.flashcards().is_empty());
    }

    #[test]
    fn flashcard_round_trip_preserves_fields() {
        let mut category = Category::new("Maths");
        category.id = Some(7);
        let dto = FlashcardDto {
            id: Some(11),
            question: "2+2?".into(),
            answer: "4".into(),
            category_id: Some(7),
        };
        assert_eq!(flashcard_to_dto(&flashcard_to_entity(dto.clone(), &category)), dto);
    }

    #[test]
    fn flashcard_takes_category_from_resolved_entity() {
        let mut category = Category::new("History");
        category.id = Some(3);
        let dto = FlashcardDto {
            id: None,
            question: "When?".into(),
            answer: "1066".into(),
            category_id: Some(999),
        };
        assert_eq!(flashcard_to_entity(dto, &category).category_id, Some(3));
    }

    #[test]
    fn flashcard_without_category_maps_to_null_category_id() {
        let card = Flashcard::new("Orphan?", "Yes");
        assert_eq!(flashcard_to_dto(&card).category_id, None);
    }

    #[test]
    fn missing_entity_maps_to_missing_dto() {
        let missing: Option<Category> = None;
        assert_eq!(missing.as_ref().map(category_to_dto), None);
    }
}
