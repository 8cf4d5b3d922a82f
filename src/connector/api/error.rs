use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::DomainError;

pub const MALFORMED_BODY: &str = "malformed request body";
pub const BODY_TOO_LARGE: &str = "request body too large";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// The one place a failure becomes an HTTP status and body.
///
/// Provider causes are logged here and replaced by the caller-facing message,
/// so nothing from the underlying error reaches the response body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// Oversized bodies keep their 413; every other rejection is a plain 400.
    pub fn malformed(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: BODY_TOO_LARGE.to_string(),
            };
        }
        Self::bad_request(MALFORMED_BODY)
    }

    /// `public_message` replaces the detail of provider failures.
    pub fn from_domain(err: DomainError, operation: &str, public_message: &str) -> Self {
        match err {
            DomainError::Validation(message) => {
                debug!("{operation} request rejected: {message}");
                Self::bad_request(message)
            }
            DomainError::Provider(cause) => {
                error!("{operation} request failed: {cause}");
                Self::internal(public_message)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}
