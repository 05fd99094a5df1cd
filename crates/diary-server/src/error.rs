use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use diary_core::error::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self(AppError::InvalidInput(message.into()))
    }

    fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::LoginFailed(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self.0 {
            AppError::InvalidCredentials | AppError::LoginFailed(_) => {
                format!("Login failed: {}", self.0)
            }
            AppError::TokenError(_) => "Failed to generate token".to_string(),
            other => other.to_string(),
        };

        if !self.0.is_client_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status, axum::Json(ErrorResponse { error: message })).into_response()
    }
}
