//! Application error type and its HTTP mapping.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use dashboard_shared::ErrorResponse;
use std::fmt;

use dashboard_core::error::{DomainError, RepoError};
use dashboard_core::ports::AuthError;

/// Application-level error taxonomy, mapped onto HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// No usable credential on the request.
    MissingToken,
    /// A credential was presented but is invalid or expired.
    InvalidToken,
    /// Login with a username/password pair that does not match the operator.
    InvalidCredentials,
    /// Malformed or missing required input fields.
    Validation(String),
    /// The targeted post does not exist.
    NotFound,
    /// Unexpected failure; the detail string is safe for the response body.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingToken => write!(f, "Missing token"),
            AppError::InvalidToken => write!(f, "Invalid token"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::NotFound => write!(f, "Post not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::InvalidCredentials => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::MissingToken => ErrorResponse::new("Missing token"),
            AppError::InvalidToken => ErrorResponse::new("Invalid token"),
            AppError::InvalidCredentials => ErrorResponse::new("Invalid credentials"),
            AppError::Validation(detail) => {
                ErrorResponse::new("Invalid post data").with_details(detail.clone())
            }
            AppError::NotFound => ErrorResponse::new("Post not found"),
            AppError::Internal(detail) => {
                ErrorResponse::new("Internal server error").with_details(detail.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("database unavailable".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("database query failed".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => AppError::MissingToken,
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::TokenExpired | AuthError::InvalidToken(_) => AppError::InvalidToken,
            AuthError::Hashing(msg) => {
                tracing::error!("Credential check failed: {}", msg);
                AppError::Internal("credential check failed".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
