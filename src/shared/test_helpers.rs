use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use crate::core::router;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{StoreError, StoreResult, TriviaStore};

pub const DEFAULT_CATEGORY_TYPES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Question with filler text
pub fn question(id: i64, category: i64) -> Question {
    Question {
        id,
        question: Sentence(3..8).fake(),
        answer: Word().fake(),
        category,
        difficulty: (id % 5) + 1,
    }
}

impl Question {
    pub fn with_text(mut self, text: &str) -> Self {
        self.question = text.to_string();
        self
    }
}

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
    fail_reads: bool,
    fail_writes: bool,
}

/// `TriviaStore` held in memory; clones share the same data
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

impl InMemoryStore {
    pub fn with_default_categories() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().categories = DEFAULT_CATEGORY_TYPES
            .iter()
            .enumerate()
            .map(|(i, t)| Category {
                id: i as i64 + 1,
                category_type: t.to_string(),
            })
            .collect();
        store
    }

    pub fn seed_questions(&self, questions: impl IntoIterator<Item = Question>) {
        let mut state = self.state.lock().unwrap();
        state.questions.extend(questions);
        state.questions.sort_by_key(|q| q.id);
        state.next_id = state.questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.state
            .lock()
            .unwrap()
            .questions
            .iter()
            .map(|q| q.id)
            .collect()
    }

    pub fn question(&self, id: i64) -> Option<Question> {
        self.state
            .lock()
            .unwrap()
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    fn read<T>(&self, f: impl FnOnce(&State) -> T) -> StoreResult<T> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(unavailable());
        }
        Ok(f(&state))
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.read(|s| s.categories.clone())
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        self.read(|s| s.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.read(|s| s.questions.clone())
    }

    async fn list_questions_by_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        self.read(|s| {
            s.questions
                .iter()
                .filter(|q| q.category == category)
                .cloned()
                .collect()
        })
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        self.read(|s| s.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.read(|s| {
            s.questions
                .iter()
                .filter(|q| q.question.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        })
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(unavailable());
        }

        let id = state.next_id.max(1);
        state.next_id = id + 1;
        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(unavailable());
        }

        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        if state.questions.len() == before {
            return Err(StoreError::NoRows(id));
        }
        Ok(())
    }

    async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> StoreResult<Vec<Question>> {
        self.read(|s| {
            s.questions
                .iter()
                .filter(|q| !exclude.contains(&q.id))
                .filter(|q| category.map_or(true, |c| q.category == c))
                .cloned()
                .collect()
        })
    }
}

/// Full API router over `store`, with the production layers
pub fn test_server(store: InMemoryStore) -> TestServer {
    let app = router::with_layers(router::routes(Arc::new(store)), vec!["*".to_string()]);
    TestServer::new(app).expect("failed to start test server")
}
