use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;
use crate::modules::store::TriviaStore;
use crate::shared::constants::ALL_CATEGORIES_ID;

/// Service for quiz play
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Pick a random question not in `previous`, from `category_id` or from
    /// every category when it is `ALL_CATEGORIES_ID`.
    pub async fn next_question(
        &self,
        previous: &[i64],
        category_id: i64,
    ) -> Result<Option<Question>> {
        let category = (category_id != ALL_CATEGORIES_ID).then_some(category_id);

        let candidates = self
            .store
            .quiz_candidates(previous, category)
            .await
            .map_err(|e| AppError::unprocessable("Failed to load quiz candidates", e))?;

        tracing::debug!(
            "Quiz candidates: category={}, excluded={}, eligible={}",
            category_id,
            previous.len(),
            candidates.len()
        );

        Ok(pick_question(candidates, &mut rand::thread_rng()))
    }
}

/// Uniform choice over the candidates; `None` when there are none
pub fn pick_question<R: Rng + ?Sized>(candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::shared::test_helpers::{question, InMemoryStore};

    fn service(store: InMemoryStore) -> QuizService {
        QuizService::new(Arc::new(store))
    }

    #[test]
    fn test_pick_question_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_question(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_pick_question_reaches_every_candidate() {
        let candidates: Vec<Question> = (1..=4).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<i64> = (0..200)
            .filter_map(|_| pick_question(candidates.clone(), &mut rng))
            .map(|q| q.id)
            .collect();
        assert_eq!(seen, (1..=4).collect::<HashSet<_>>());
    }

    #[tokio::test]
    async fn test_only_eligible_candidate_is_returned() {
        let store = InMemoryStore::with_default_categories();
        store.seed_questions(vec![question(1, 1), question(2, 1), question(3, 2)]);

        let picked = service(store).next_question(&[1], 1).await.unwrap();
        assert_eq!(picked.map(|q| q.id), Some(2));
    }

    #[tokio::test]
    async fn test_all_categories_excludes_previous() {
        let store = InMemoryStore::with_default_categories();
        store.seed_questions((1..=6).map(|id| question(id, id)));
        let service = service(store);

        for _ in 0..20 {
            let picked = service
                .next_question(&[1, 2, 3, 4, 5], ALL_CATEGORIES_ID)
                .await
                .unwrap();
            assert_eq!(picked.map(|q| q.id), Some(6));
        }
    }

    #[tokio::test]
    async fn test_exhausted_category_yields_none() {
        let store = InMemoryStore::with_default_categories();
        store.seed_questions(vec![question(1, 3), question(2, 4)]);

        let picked = service(store).next_question(&[1], 3).await.unwrap();
        assert!(picked.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_is_unprocessable() {
        let store = InMemoryStore::default();
        store.fail_reads();

        let err = service(store).next_question(&[], 0).await.unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }
}
