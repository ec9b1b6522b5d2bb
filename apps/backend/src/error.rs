//! Error handling for the backend API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use exercise_core::ExerciseError;
use serde::Serialize;
use thiserror::Error;

/// Message returned for every server-side failure; details only go to the log.
const INTERNAL_MESSAGE: &str = "internal error";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Insufficient items: {0}")]
    InsufficientItems(String),

    #[error("Insufficient distractors: {0}")]
    InsufficientDistractors(String),

    #[error("Exercise not found: {0}")]
    ExerciseNotFound(i64),

    #[error("Invalid option id: {0}")]
    InvalidOptionId(i64),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status and stable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::CategoryNotFound(_) => (StatusCode::NOT_FOUND, "category_not_found"),
            ApiError::InsufficientItems(_) => (StatusCode::BAD_REQUEST, "insufficient_items"),
            ApiError::InsufficientDistractors(_) => {
                (StatusCode::BAD_REQUEST, "insufficient_distractors")
            }
            ApiError::ExerciseNotFound(_) => (StatusCode::NOT_FOUND, "exercise_not_found"),
            ApiError::InvalidOptionId(_) => (StatusCode::BAD_REQUEST, "invalid_option_id"),
            ApiError::InvalidBody(rejection) => (rejection.status(), "invalid_request"),
            ApiError::Database(_) | ApiError::Migration(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl From<ExerciseError> for ApiError {
    fn from(error: ExerciseError) -> Self {
        match error {
            ExerciseError::InsufficientItems { .. } => ApiError::InsufficientItems(error.to_string()),
            ExerciseError::InsufficientDistractors { .. } => {
                ApiError::InsufficientDistractors(error.to_string())
            }
            ExerciseError::ExerciseNotFound { exercise_id } => ApiError::ExerciseNotFound(exercise_id),
            ExerciseError::InvalidOptionId { option_id } => ApiError::InvalidOptionId(option_id),
            ExerciseError::MissingCorrectOption => ApiError::Internal(error.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn internal() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_code();

        let body = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            ErrorResponse::internal()
        } else {
            ErrorResponse {
                error: error_type.to_string(),
                message: self.to_string(),
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
