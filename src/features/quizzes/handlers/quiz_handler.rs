use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Next quiz question
///
/// Picks uniformly at random among the questions whose id is not in
/// `previous_questions`, restricted to `quiz_category.id` unless it is `0`.
/// `question` is `null` when nothing is left to ask.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question or null", body = QuizResponseDto),
        (status = 422, description = "Invalid body or database failure", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let category_id = dto.quiz_category.id.resolve()?;
    let question = service
        .next_question(&dto.previous_questions, category_id)
        .await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question: question.map(Into::into),
    }))
}
