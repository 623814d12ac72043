pub mod question_dto;

pub use question_dto::{
    CategoryQuestionsResponseDto, CreateQuestionDto, QuestionDto, QuestionPageResponseDto,
    QuestionsPostDto, QuestionsRequest, SearchQuestionsResponseDto,
};
