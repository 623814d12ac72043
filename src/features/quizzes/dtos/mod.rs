pub mod quiz_dto;

pub use quiz_dto::{QuizCategoryDto, QuizCategoryId, QuizRequestDto, QuizResponseDto};
