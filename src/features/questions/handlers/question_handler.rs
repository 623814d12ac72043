use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, PathId};
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, QuestionDto, QuestionPageResponseDto, QuestionsPostDto,
    QuestionsRequest, SearchQuestionsResponseDto,
};
use crate::features::questions::models::Question;
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery, SuccessResponse};

fn to_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionPageResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionPageResponseDto>> {
    let page = service.list_page(query.page()).await?;

    Ok(Json(QuestionPageResponseDto {
        success: true,
        questions: to_dtos(page.questions),
        total_questions: page.total,
        current_category: Vec::new(),
        categories: page.category_types,
    }))
}

/// Create a question, or search questions when `searchTerm` is non-empty
///
/// Search matches `searchTerm` against the question text ignoring case and is
/// not paginated.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionsPostDto,
    responses(
        (status = 200, description = "Search results; a created question answers `{\"success\": true}` only", body = SearchQuestionsResponseDto),
        (status = 422, description = "Invalid body or database failure", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_or_search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<QuestionsPostDto>,
) -> Result<Response> {
    match QuestionsRequest::try_from(dto)? {
        QuestionsRequest::Search(term) => {
            let matches = service.search(&term).await?;
            Ok(Json(SearchQuestionsResponseDto {
                success: true,
                total_questions: matches.len(),
                questions: to_dtos(matches),
            })
            .into_response())
        }
        QuestionsRequest::Create(create) => {
            service.create(create.into()).await?;
            Ok(Json(SuccessResponse::ok()).into_response())
        }
    }
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = SuccessResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    PathId(id): PathId,
) -> Result<Json<SuccessResponse>> {
    service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// List the questions of a category, ten per page
///
/// `cat_id` is the zero-based position of the category: the category with id
/// `cat_id + 1` is listed.
#[utoipa::path(
    get,
    path = "/categories/{cat_id}/questions",
    params(
        ("cat_id" = i64, Path, description = "Zero-based category position (category id minus one)"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "Page of the category's questions", body = CategoryQuestionsResponseDto),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    PathId(cat_id): PathId,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let result = service.list_category_page(cat_id, query.page()).await?;

    Ok(Json(CategoryQuestionsResponseDto {
        success: true,
        questions: to_dtos(result.page.questions),
        total_questions: result.page.total,
        categories: result.page.category_types,
        current_category: result.category.into(),
    }))
}
