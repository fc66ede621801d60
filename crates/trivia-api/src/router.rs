use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{category, error::ApiError, question, quiz, state::ApiState};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(category::routes())
        .merge(question::routes())
        .merge(quiz::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    ApiError::NotFound
}
