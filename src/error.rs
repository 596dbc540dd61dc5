use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::repositories::RepositoryError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Request-terminating errors
///
/// Each variant maps to one HTTP status and a short plain-text body. None of
/// them is produced after the registry has been mutated.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid request method")]
    MethodNotAllowed,

    #[error("Invalid server ID")]
    InvalidServerId,

    #[error("Invalid read request body")]
    InvalidBody,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Server not found")]
    ServerNotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidServerId | AppError::InvalidBody | AppError::InvalidJson => {
                StatusCode::BAD_REQUEST
            }
            AppError::ServerNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => AppError::ServerNotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
