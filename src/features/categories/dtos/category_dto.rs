use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Serialized category: `{id, type}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub category_type: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category_type: c.category_type,
        }
    }
}

/// Response of `GET /categories`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub success: bool,
    /// Category type keyed by category id
    pub categories: BTreeMap<i64, String>,
}

impl CategoriesResponseDto {
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: categories
                .into_iter()
                .map(|c| (c.id, c.category_type))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dto_uses_type_key() {
        let dto = CategoryDto::from(Category {
            id: 1,
            category_type: "Science".to_string(),
        });
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({"id": 1, "type": "Science"})
        );
    }

    #[test]
    fn test_categories_response_is_keyed_by_id() {
        let response = CategoriesResponseDto::from_categories(vec![
            Category {
                id: 2,
                category_type: "Art".to_string(),
            },
            Category {
                id: 1,
                category_type: "Science".to_string(),
            },
        ]);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({
                "success": true,
                "categories": {"1": "Science", "2": "Art"}
            })
        );
    }
}
