//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stayease_domain::error::StayEaseError;

/// JSON error body returned by most API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error body returned by the login endpoints.
#[derive(Serialize)]
struct LoginErrorBody {
    success: bool,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyShape {
    Error,
    Login,
}

/// Maps [`StayEaseError`] to an HTTP response with appropriate status code.
///
/// Validation errors become 400, not-found errors 404 and storage errors 500.
/// Storage failures expose their full cause chain as the message.
pub struct ApiError {
    error: StayEaseError,
    shape: BodyShape,
}

impl ApiError {
    /// Render the error as `{"success": false, "message": ...}`.
    #[must_use]
    pub fn login(error: impl Into<StayEaseError>) -> Self {
        Self {
            error: error.into(),
            shape: BodyShape::Login,
        }
    }
}

impl From<StayEaseError> for ApiError {
    fn from(error: StayEaseError) -> Self {
        Self {
            error,
            shape: BodyShape::Error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.error {
            StayEaseError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StayEaseError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StayEaseError::Storage(_) => {
                let message = self.error.full_message();
                tracing::error!(error = %message, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        match self.shape {
            BodyShape::Error => (status, Json(ErrorBody { error: message })).into_response(),
            BodyShape::Login => (
                status,
                Json(LoginErrorBody {
                    success: false,
                    message,
                }),
            )
                .into_response(),
        }
    }
}
