use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application error taxonomy. Every handler failure funnels through here so
/// clients only ever see a status code and a `message` body; storage and
/// cache detail stays in the server log.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input; the message names the offending field.
    Validation(String),
    /// Bad login credential. Deliberately indistinguishable from missing input.
    InvalidCredentials,
    /// The referenced record does not exist.
    NotFound(&'static str),
    /// Unique-constraint conflict with an existing record.
    Duplicate(&'static str),
    Storage(sqlx::Error),
    Cache(redis::RedisError),
    Token(jsonwebtoken::errors::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid password".to_string())
            }
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            AppError::Duplicate(message) => (StatusCode::CONFLICT, message.to_string()),
            AppError::Storage(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Cache(err) => {
                tracing::error!("Cache error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Token(err) => {
                tracing::error!("Token error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err)
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Cache(err)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Token(err)
    }
}

/// Unique-key conflicts carry a specific client-visible message; callers
/// check for them before falling back to the generic storage path.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
        }
        _ => false,
    }
}
