//! Error conversions
//!
//! `From` implementations for driver errors and the axum response rendering.

#[cfg(feature = "sqlx")]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Every store failure is reported to clients as a plain 500; the driver error
/// is kept as the source for logging.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::internal("Internal server error").with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Renders `{"error": <message>}` with the mapped status.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_error_is_internal() {
        use super::*;
        use crate::error::kind::ErrorKind;

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(app_err.message(), "Internal server error");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use crate::error::app_error::AppError;
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let response = AppError::forbidden("Incorrect Password").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = AppError::bad_request("Missing required fields").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
