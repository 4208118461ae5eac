//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` type that logs server-side errors before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use mango_chili_checkout::CheckoutError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A checkout action was rejected by the state machine.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Session load/store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// JSON body sent for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side failures are logged with full detail
        if matches!(self, Self::Session(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Checkout(err) => match err {
                CheckoutError::WrongStage(_) | CheckoutError::SubmissionInFlight => {
                    StatusCode::CONFLICT
                }
                CheckoutError::InvalidNumber(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) => "Internal server error".to_string(),
            Self::Checkout(err) => err.to_string(),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use mango_chili_checkout::Stage;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Checkout(CheckoutError::SubmissionInFlight);
        assert_eq!(
            err.to_string(),
            "Checkout error: an order submission is already in flight"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::WrongStage(Stage::Cart))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::SubmissionInFlight)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::InvalidNumber(
                "houseNumber"
            ))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
