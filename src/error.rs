use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset '{}' unavailable: {reason}", .path.display())]
    DatasetUnavailable { path: PathBuf, reason: String },

    #[error("Dataset parsing error: {0}")]
    DatasetParse(String),

    #[error("Recipe parsing error: {0}")]
    RecipeParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Graph has no ingredients")]
    EmptyGraph,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `DatasetUnavailable` error for a path.
    pub fn dataset_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::DatasetUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a message suitable for logs.
    /// Parser internals are summarised rather than echoed.
    pub fn log_safe(&self) -> String {
        match self {
            Error::DatasetUnavailable { path, .. } => {
                format!("Dataset unavailable at {}", path.display())
            }
            Error::DatasetParse(msg) => format!("Dataset parsing error: {msg}"),
            Error::RecipeParse(msg) => format!("Recipe parsing error: {msg}"),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NotFound(msg) => format!("Not found: {msg}"),
            Error::Validation(msg) => format!("Validation error: {msg}"),
            Error::EmptyGraph => "Graph has no ingredients".to_string(),
            Error::Internal(msg) => format!("Internal error: {msg}"),
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request error: {}", self.log_safe());

        let (status, error_message) = match &self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::EmptyGraph => (StatusCode::NOT_FOUND, self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
