use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.store
            .list_categories()
            .await
            .map_err(|e| AppError::internal("Failed to list categories", e))
    }
}
