use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::error::Error as StdError;
use thiserror::Error;

use crate::forms::FormErrors;
use crate::gateway::{GENERIC_FAILURE_MESSAGE, SubmissionFailure};
use crate::logging::FormEvent;

/// Centralized application error type covering every failure a form
/// endpoint can report.
#[derive(Debug, Error)]
pub enum AppError {
    // Field violations, rendered inline by the screen
    #[error("validation failed: {0}")]
    Validation(FormErrors),

    // Non-field failure, rendered as a single banner
    #[error(transparent)]
    Submission(#[from] SubmissionFailure),

    // Request parsing errors
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("unsupported media type: expected application/json")]
    UnsupportedMediaType,

    #[error("request body too large")]
    PayloadTooLarge,
}

/// Standard JSON error response structure
#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a FormErrors>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Submission(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Gets the user-facing error message. Submission failures never leak
    /// their cause.
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => "validation failed".to_string(),
            AppError::Submission(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }

    fn log_error(&self) {
        match self.status_code() {
            code if code.is_client_error() => {
                tracing::warn!(
                    error = %self,
                    status_code = %code,
                    "Client error"
                );
            }
            code if code.is_server_error() => {
                if let AppError::Submission(failure) = self {
                    crate::log_form_event!(
                        FormEvent::SubmissionFailed,
                        reason = failure.reason(),
                        status_code = %code,
                        "Form submission failed"
                    );
                }
                tracing::error!(
                    error = %self,
                    status_code = %code,
                    source = ?self.source(),
                    "Server error"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log_error();

        let status = self.status_code();
        let fields = match &self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = Json(ErrorResponse {
            error: self.user_message(),
            fields,
        });

        (status, body).into_response()
    }
}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        AppError::Validation(errors)
    }
}
