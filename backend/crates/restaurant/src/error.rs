//! Restaurant Error Types
//!
//! Domain error variants and their mapping onto the unified
//! `kernel::error::AppError`. Every variant produces a status and a
//! `{"error": ...}` body; no handler swallows a failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

pub type RestaurantResult<T> = Result<T, RestaurantError>;

#[derive(Debug, Error)]
pub enum RestaurantError {
    /// A required field is absent or empty
    #[error("Missing required fields")]
    MissingFields,

    /// Body is not readable JSON of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No account for the login email or update target
    #[error("User not found")]
    AccountNotFound,

    /// No account for a restaurant lookup
    #[error("Restaurant not found")]
    RestaurantNotFound,

    /// Password does not match the stored hash
    #[error("Incorrect Password")]
    IncorrectPassword,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestaurantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RestaurantError::MissingFields | RestaurantError::InvalidBody(_) => {
                ErrorKind::BadRequest
            }
            RestaurantError::AccountNotFound | RestaurantError::RestaurantNotFound => {
                ErrorKind::NotFound
            }
            RestaurantError::IncorrectPassword => ErrorKind::Forbidden,
            RestaurantError::Database(_) | RestaurantError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Text sent to the client. Server-side details stay in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            RestaurantError::MissingFields => "Missing required fields",
            RestaurantError::InvalidBody(_) => "Invalid request body",
            RestaurantError::AccountNotFound => "User not found",
            RestaurantError::RestaurantNotFound => "Restaurant not found",
            RestaurantError::IncorrectPassword => "Incorrect Password",
            RestaurantError::Database(_) | RestaurantError::Internal(_) => {
                "Internal server error"
            }
        }
    }

    fn log(&self) {
        match self {
            RestaurantError::Database(e) => {
                tracing::error!(error = %e, "Restaurant database error");
            }
            RestaurantError::Internal(msg) => {
                tracing::error!(message = %msg, "Restaurant internal error");
            }
            RestaurantError::IncorrectPassword => {
                tracing::warn!("Login attempt with incorrect password");
            }
            _ => {
                tracing::debug!(error = %self, "Restaurant request rejected");
            }
        }
    }
}

impl From<RestaurantError> for AppError {
    fn from(err: RestaurantError) -> Self {
        match err {
            RestaurantError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.client_message()),
        }
    }
}

impl IntoResponse for RestaurantError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<PasswordHashError> for RestaurantError {
    fn from(err: PasswordHashError) -> Self {
        RestaurantError::Internal(err.to_string())
    }
}

impl From<TokenError> for RestaurantError {
    fn from(err: TokenError) -> Self {
        RestaurantError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for RestaurantError {
    fn from(err: tokio::task::JoinError) -> Self {
        RestaurantError::Internal(format!("blocking task failed: {err}"))
    }
}
