use std::io;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error("language model error: {0}")]
    LanguageModel(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::LanguageModel(_) | AppError::IssueTracker(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(%status, "request failed: {self}");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
