use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ErrorResponse, SuccessResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_or_search_questions,
        questions_handlers::delete_question,
        questions_handlers::list_questions_by_category,
        // Quizzes
        quizzes_handlers::next_quiz_question,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            SuccessResponse,
            // Categories
            categories_dtos::CategoryDto,
            categories_dtos::CategoriesResponseDto,
            // Questions
            questions_dtos::QuestionDto,
            questions_dtos::QuestionsPostDto,
            questions_dtos::QuestionPageResponseDto,
            questions_dtos::CategoryQuestionsResponseDto,
            questions_dtos::SearchQuestionsResponseDto,
            // Quizzes
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizCategoryId,
            quizzes_dtos::QuizResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories (read-only)"),
        (name = "questions", description = "Trivia questions: listing, search, creation, deletion"),
        (name = "quizzes", description = "Random unseen quiz questions"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "API documentation for the trivia game backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
