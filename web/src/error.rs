//! Error types for web handlers.
//!
//! This module bridges domain errors and HTTP responses. Every error renders
//! as the failure envelope (`success: false` plus `error_message`).
//!
//! Client mistakes and unknown ids both answer `400 Bad Request`: the public
//! contract treats a missing record as bad input rather than a missing
//! resource, and existing clients key off that status.

use crate::envelope::{messages, ApiResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tasklist_core::{TodoError, TodoId};

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
///     state.store().send(TodoAction::Complete { id }).await?;
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for logs)
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Attach the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the user-facing message, keeping status, code and source.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Request body could not be decoded.
    #[must_use]
    pub fn invalid_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::INVALID_BODY, "INVALID_BODY")
    }

    /// Path id is not an integer.
    #[must_use]
    pub fn invalid_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::INVALID_ID, "INVALID_ID")
    }

    /// No record carries `id`.
    #[must_use]
    pub fn not_found(id: TodoId) -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::NOT_FOUND, "NOT_FOUND")
            .with_source(anyhow::Error::new(TodoError::NotFound(id)))
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "INTERNAL_SERVER_ERROR",
        )
    }

    /// HTTP status this error renders with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                code = self.code,
                message = %self.message,
                error = self.source.as_ref().map(tracing::field::display),
                "Internal server error"
            );
        } else {
            tracing::debug!(
                status = %self.status,
                code = self.code,
                error = self.source.as_ref().map(tracing::field::display),
                "Request rejected"
            );
        }

        (self.status, Json(ApiResponse::error(self.message))).into_response()
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => Self::not_found(id),
        }
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(messages::INTERNAL).with_source(err)
    }
}
