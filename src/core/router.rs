use std::sync::Arc;

use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::error::AppError;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::TriviaStore;

/// API routes over `store`, without middleware
pub fn routes(store: Arc<dyn TriviaStore>) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(QuizService::new(store));

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(questions_routes::routes(question_service))
        .merge(quizzes_routes::routes(quiz_service))
        .route("/health", axum::routing::get(health_check))
        .fallback(|| async { AppError::NotFound("No route".to_string()) })
}

/// CORS headers, request ids and request tracing around `router`
pub fn with_layers(router: Router, cors_allowed_origins: Vec<String>) -> Router {
    router
        .layer(middleware::cors_layer(cors_allowed_origins))
        .layer(middleware::allow_headers_layer())
        .layer(middleware::allow_methods_layer())
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
