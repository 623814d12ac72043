use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::store::StoreError;
use crate::shared::types::ErrorResponse;

/// Error kinds surfaced to API clients.
///
/// The carried string is a server-side detail: it is logged, never sent.
/// Clients only see the fixed message for the status code.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Store failure on a read path
    pub fn internal(context: &str, e: StoreError) -> Self {
        tracing::error!("{}: {:?}", context, e);
        AppError::Internal(format!("{}: {}", context, e))
    }

    /// Store failure while mutating or on an endpoint that reports everything as 422
    pub fn unprocessable(context: &str, e: StoreError) -> Self {
        tracing::error!("{}: {:?}", context, e);
        AppError::Unprocessable(format!("{}: {}", context, e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable request: {}", msg),
            AppError::NotFound(msg) | AppError::BadRequest(msg) => {
                tracing::debug!("{}: {}", status, msg)
            }
        }

        (status, Json(ErrorResponse::for_status(status))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unprocessable("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_hides_detail() {
        let response = AppError::Unprocessable("column \"difficulty\" is null".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": 422,
                "message": "Not Processable"
            })
        );
    }
}
