use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::features::questions::dtos::QuestionDto;

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of the questions already asked in this quiz
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategoryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category id; `0` plays every category
    pub id: QuizCategoryId,
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

/// Clients send the category id either as a number or as a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuizCategoryId {
    Number(i64),
    Text(String),
}

impl QuizCategoryId {
    pub fn resolve(&self) -> Result<i64, AppError> {
        match self {
            QuizCategoryId::Number(id) => Ok(*id),
            QuizCategoryId::Text(raw) => raw.trim().parse::<i64>().map_err(|_| {
                AppError::Unprocessable(format!("Invalid quiz category id '{}'", raw))
            }),
        }
    }
}

/// Response of `POST /quizzes`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    /// `null` once every eligible question has been asked
    pub question: Option<QuestionDto>,
}
