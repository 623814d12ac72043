use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{StoreError, TriviaStore};
use crate::shared::constants::CATEGORY_PATH_OFFSET;
use crate::shared::types::paginate;

/// One page of the question listing
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: usize,
    pub category_types: Vec<String>,
}

/// One page of a category's questions
#[derive(Debug, Clone)]
pub struct CategoryQuestionPage {
    pub category: Category,
    pub page: QuestionPage,
}

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Page `page` of all questions ordered by id; an empty page is NotFound
    pub async fn list_page(&self, page: i64) -> Result<QuestionPage> {
        let all = self
            .store
            .list_questions()
            .await
            .map_err(|e| AppError::internal("Failed to list questions", e))?;

        let questions = paginate(&all, page);
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} ({} in total)",
                page,
                all.len()
            )));
        }

        Ok(QuestionPage {
            questions,
            total: all.len(),
            category_types: self.category_types().await?,
        })
    }

    /// Page `page` of the questions in category `cat_id + CATEGORY_PATH_OFFSET`
    pub async fn list_category_page(&self, cat_id: i64, page: i64) -> Result<CategoryQuestionPage> {
        let effective_id = cat_id
            .checked_add(CATEGORY_PATH_OFFSET)
            .ok_or_else(|| AppError::NotFound(format!("Category {} out of range", cat_id)))?;

        let category = self
            .store
            .find_category(effective_id)
            .await
            .map_err(|e| AppError::internal("Failed to get category", e))?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", effective_id)))?;

        let all = self
            .store
            .list_questions_by_category(effective_id)
            .await
            .map_err(|e| AppError::internal("Failed to list questions by category", e))?;

        let questions = paginate(&all, page);
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} of category {}",
                page, effective_id
            )));
        }

        Ok(CategoryQuestionPage {
            category,
            page: QuestionPage {
                questions,
                total: all.len(),
                category_types: self.category_types().await?,
            },
        })
    }

    /// Case-insensitive substring search over question text
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        self.store
            .search_questions(term)
            .await
            .map_err(|e| AppError::unprocessable("Failed to search questions", e))
    }

    /// Insert a new question
    pub async fn create(&self, new: NewQuestion) -> Result<Question> {
        let question = self
            .store
            .insert_question(new)
            .await
            .map_err(|e| AppError::unprocessable("Failed to create question", e))?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(question)
    }

    /// Delete a question. A missing id is NotFound; a failed delete is Unprocessable.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let existing = self
            .store
            .find_question(id)
            .await
            .map_err(|e| AppError::unprocessable("Failed to look up question", e))?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        match self.store.delete_question(id).await {
            Ok(()) => {
                tracing::info!("Question deleted: id={}", id);
                Ok(())
            }
            Err(e @ StoreError::NoRows(_)) => {
                Err(AppError::unprocessable("Question vanished before delete", e))
            }
            Err(e @ StoreError::Database(_)) => {
                Err(AppError::unprocessable("Failed to delete question", e))
            }
        }
    }

    async fn category_types(&self) -> Result<Vec<String>> {
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(|e| AppError::internal("Failed to list categories", e))?;

        Ok(categories.into_iter().map(|c| c.category_type).collect())
    }
}
