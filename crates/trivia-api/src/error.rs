use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Domain errors, each mapped to a fixed JSON error body.
///
/// The HTTP status always matches the `status_code` field in the body, and
/// validation runs before persistence so a missing request field is a 422,
/// never a 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("unprocessable request: {0}")]
    Unprocessable(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable(reason) => {
                tracing::debug!(%reason, "rejecting unprocessable request");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // A lookup that came back empty is a missing resource, not a failure.
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(err) => {
                tracing::error!(error = %err, "database failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match status {
            StatusCode::NOT_FOUND => "Resource Not Found.",
            StatusCode::UNPROCESSABLE_ENTITY => "Request is Not Processable.",
            _ => "Internal Server Error",
        };

        (
            status,
            Json(json!({
                "status_code": status.as_u16(),
                "message": message,
                "success": false,
            })),
        )
            .into_response()
    }
}
