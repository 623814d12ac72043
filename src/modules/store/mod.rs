//! Data access for categories and questions.
//!
//! Services talk to the database only through [`TriviaStore`], so every
//! operation returns an explicit [`StoreError`] the caller maps to a status.

mod postgres;

pub use postgres::PgTriviaStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A delete matched no row
    #[error("no row with id {0}")]
    NoRows(i64),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Reads and writes categories and questions.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Category by id, `None` when absent.
    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// All questions ordered by id.
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose `category` equals the given id, ordered by id.
    async fn list_questions_by_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    /// Question by id, `None` when absent.
    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Insert a question and return the stored row.
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Delete a question; [`StoreError::NoRows`] when nothing was deleted.
    async fn delete_question(&self, id: i64) -> StoreResult<()>;

    /// Questions not listed in `exclude`, restricted to `category` when given.
    async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> StoreResult<Vec<Question>>;
}

/// Escape `LIKE` metacharacters so the term matches literally (escape char `\`)
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
