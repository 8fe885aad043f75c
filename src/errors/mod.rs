//! Error handling module for the watchlist backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Request rejected before reaching the repository
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },
    /// Overseerr call failed; the message is the caller-facing summary
    Upstream(String),
    /// Database error
    Database(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Log the gateway failure in full and keep only `summary` for the caller.
    pub fn upstream(summary: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "{}", summary);
        AppError::Upstream(summary.to_string())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation { .. } => codes::VALIDATION_ERROR,
            AppError::Upstream(_) => codes::UPSTREAM_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation { message, .. } => message.clone(),
            AppError::Upstream(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the first message by field name; the full map goes into `details`.
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let message = fields
            .iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::Validation {
            message,
            details: serde_json::to_value(&errors).ok(),
        }
    }
}


/// Error details in the validation response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Body for requests rejected at the boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

/// Body for every other error: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::Validation { message, details } => {
                let body = ValidationErrorResponse {
                    success: false,
                    error: ErrorDetails {
                        code: codes::VALIDATION_ERROR.to_string(),
                        message,
                        details,
                    },
                };
                (status, Json(body)).into_response()
            }
            AppError::NotFound(msg) | AppError::Upstream(msg) => {
                (status, Json(ErrorResponse { error: msg })).into_response()
            }
            // Storage details stay in the logs.
            AppError::Database(_) => (
                status,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::models::CreateMovieRequest;

    #[test]
    fn test_validation_message_is_stable_across_fields() {
        let request = CreateMovieRequest {
            id: String::new(),
            title: String::new(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            runtime: None,
            external_movie_id: None,
        };

        for _ in 0..16 {
            let err = AppError::from(request.validate().unwrap_err());
            assert_eq!(err.message(), "Movie id is required");
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_upstream_keeps_summary_only() {
        let err = AppError::upstream("Failed to fetch movie details", "connection refused");
        assert_eq!(err.message(), "Failed to fetch movie details");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
