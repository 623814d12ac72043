use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: error_message(status).to_string(),
        }
    }
}

/// Fixed client-facing text per status
pub fn error_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::UNPROCESSABLE_ENTITY => "Not Processable",
        _ => "Internal Server Error",
    }
}

/// Body of mutations that return nothing but the outcome
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter (1-indexed, default 1).
///
/// Kept as raw text: a value that is not an integer falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Slice the `page`-th window of `QUESTIONS_PER_PAGE` items.
///
/// Pages below 1 and pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    if start >= items.len() {
        return Vec::new();
    }

    let end = start
        .saturating_add(QUESTIONS_PER_PAGE as usize)
        .min(items.len());
    items[start..end].to_vec()
}
