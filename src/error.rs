use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use http::StatusCode;
use serde_json::json;
use std::fmt;

pub const USERNAME_TAKEN: &str = "Username is already taken.";
pub const UNKNOWN_ERROR: &str = "Unknown error.";

/// Closed set of request failure modes. Persistence errors are classified
/// into variants at conversion time so handlers never inspect driver error
/// codes themselves.
#[derive(Debug)]
pub enum ApiError {
    /// Client input violated one or more field rules. Carries every message.
    Validation(Vec<String>),
    /// A uniqueness constraint rejected the write.
    Conflict(&'static str),
    /// Any other error surfaced by the database driver.
    Database(DieselError),
    /// The pool could not hand out a connection.
    DatabaseConnection(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(messages) => {
                write!(f, "Validation error: {}", messages.join(" "))
            }
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ApiError::Conflict(USERNAME_TAKEN)
            }
            other => ApiError::Database(other),
        }
    }
}

impl From<ApiError> for (StatusCode, serde_json::Value) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, json!({ "messages": messages }))
            }
            ApiError::Conflict(message) => (StatusCode::CONFLICT, json!({ "message": message })),
            // Infrastructure detail stays in the server logs, never in the body.
            ApiError::Database(_) | ApiError::DatabaseConnection(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": UNKNOWN_ERROR }),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(_) | ApiError::Conflict(_) => {}
            other => tracing::error!("request failed: {}", other),
        }
        let (status, body): (StatusCode, serde_json::Value) = self.into();
        (status, Json(body)).into_response()
    }
}
