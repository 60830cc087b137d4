//! Backend error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the backend. Each variant
//! maps to a caller-facing numeric code and a structured JSON error
//! response. Domain-class failures (codes 400–499) are answered with
//! `409 CONFLICT`; everything else is a `500`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 409,
///     "message": "the user already exists"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Caller-facing numeric error code.
    pub code: u16,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Code | Category        | HTTP Status                |
/// |------|-----------------|----------------------------|
/// | 400  | Validation      | 409 Conflict               |
/// | 404  | Not Found       | 409 Conflict               |
/// | 409  | Conflict        | 409 Conflict               |
/// | 500  | Internal        | 500 Internal Server Error  |
///
/// Not-found stays distinguishable from conflict even though both are
/// answered with `409`: a missing identifier and a violated business rule
/// are different conditions for callers inspecting the numeric code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Caller-supplied input failed a precondition (empty field,
    /// malformed email, weak password). No side effects were performed.
    #[error("{0}")]
    Validation(String),

    /// A referenced identifier does not exist in its store.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint or business rule blocked the operation
    /// (duplicate email/username, wrong current password, ...).
    #[error("{0}")]
    Conflict(String),

    /// Unexpected fault during a store operation. Logged with full
    /// detail at the fault site; the caller only sees a generic message.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the caller-facing numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the HTTP status code for this variant.
    ///
    /// Every domain-class condition (code 400–499) maps to `409 CONFLICT`;
    /// all other failures map to `500`.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for an [`ApiError::Validation`] with an owned message.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for an [`ApiError::NotFound`] with an owned message.
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Shorthand for an [`ApiError::Conflict`] with an owned message.
    #[must_use]
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Shorthand for an [`ApiError::Internal`] with an owned message.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
