use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::categories::dtos::CategoryDto;
use crate::features::questions::models::{NewQuestion, Question};

/// Serialized question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Body of `POST /questions`.
///
/// A non-empty `searchTerm` makes the request a search; otherwise the
/// remaining fields describe a question to create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuestionsPostDto {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Validated question fields for creation
#[derive(Debug, Clone, Validate)]
pub struct CreateQuestionDto {
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: String,

    pub category: i64,

    pub difficulty: i64,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// What a `POST /questions` body asks for
#[derive(Debug, Clone)]
pub enum QuestionsRequest {
    Search(String),
    Create(CreateQuestionDto),
}

impl TryFrom<QuestionsPostDto> for QuestionsRequest {
    type Error = AppError;

    fn try_from(dto: QuestionsPostDto) -> Result<Self, Self::Error> {
        if let Some(term) = dto.search_term.filter(|t| !t.is_empty()) {
            return Ok(QuestionsRequest::Search(term));
        }

        let missing = |field: &str| AppError::Unprocessable(format!("Missing field '{}'", field));
        let create = CreateQuestionDto {
            question: dto.question.ok_or_else(|| missing("question"))?,
            answer: dto.answer.ok_or_else(|| missing("answer"))?,
            category: dto.category.ok_or_else(|| missing("category"))?,
            difficulty: dto.difficulty.ok_or_else(|| missing("difficulty"))?,
        };
        create
            .validate()
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        Ok(QuestionsRequest::Create(create))
    }
}

/// Response of `GET /questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Number of questions before pagination
    pub total_questions: usize,
    /// Always empty on this listing
    pub current_category: Vec<CategoryDto>,
    /// Every category type, in id order
    pub categories: Vec<String>,
}

/// Response of `GET /categories/{cat_id}/questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Number of questions in the category before pagination
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: CategoryDto,
}

/// Response of a `POST /questions` search
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Number of matches
    pub total_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<QuestionsRequest, AppError> {
        let dto: QuestionsPostDto = serde_json::from_value(body).unwrap();
        QuestionsRequest::try_from(dto)
    }

    #[test]
    fn test_search_term_selects_search() {
        let request = parse(json!({"searchTerm": "title", "question": "ignored"})).unwrap();
        assert!(matches!(request, QuestionsRequest::Search(t) if t == "title"));
    }

    #[test]
    fn test_empty_search_term_falls_back_to_create() {
        let request = parse(json!({
            "searchTerm": "",
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "category": 2,
            "difficulty": 3
        }))
        .unwrap();

        match request {
            QuestionsRequest::Create(dto) => {
                assert_eq!(dto.answer, "Leonardo da Vinci");
                assert_eq!(dto.category, 2);
                assert_eq!(dto.difficulty, 3);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_unprocessable() {
        let err = parse(json!({"question": "q", "answer": "a", "category": 1})).unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(msg) if msg.contains("difficulty")));
    }

    #[test]
    fn test_empty_text_is_unprocessable() {
        let err = parse(json!({
            "question": "",
            "answer": "a",
            "category": 1,
            "difficulty": 1
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_empty_body_is_unprocessable() {
        assert!(parse(json!({})).is_err());
    }
}
