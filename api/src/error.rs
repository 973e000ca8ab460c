use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can produce; each maps to exactly one HTTP
/// status and a `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied")]
    AccessDenied,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// A failed write is a constraint violation as far as the caller is
    /// concerned; anything without a database message stays a 500.
    pub fn constraint(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db) => ApiError::BadRequest(db.message().to_string()),
            None => err.into(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::AccessDenied | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let ApiError::Internal(err) = &self {
            tracing::error!("request failed: {err:?}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
