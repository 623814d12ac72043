use async_trait::async_trait;
use sqlx::PgPool;

use super::{escape_like, StoreError, StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// PostgreSQL-backed store
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn list_questions_by_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NoRows(id));
        }
        Ok(())
    }

    async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE NOT (id = ANY($1))
              AND ($2::BIGINT IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}
