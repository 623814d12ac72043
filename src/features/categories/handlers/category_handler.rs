use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoriesResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
///
/// Returns every category type keyed by its id.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories keyed by id", body = CategoriesResponseDto),
        (status = 500, description = "Database failure", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoriesResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoriesResponseDto::from_categories(categories)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{test_server, InMemoryStore};

    #[tokio::test]
    async fn test_list_categories_keyed_by_id() {
        let server = test_server(InMemoryStore::with_default_categories());

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["categories"]["1"], json!("Science"));
        assert_eq!(body["categories"]["6"], json!("Sports"));
        assert_eq!(body["categories"].as_object().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_list_categories_empty_table() {
        let server = test_server(InMemoryStore::default());

        let response = server.get("/categories").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"success": true, "categories": {}})
        );
    }

    #[tokio::test]
    async fn test_list_categories_store_failure_is_500() {
        let store = InMemoryStore::with_default_categories();
        store.fail_reads();
        let server = test_server(store);

        let response = server.get("/categories").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 500, "message": "Internal Server Error"})
        );
    }
}
