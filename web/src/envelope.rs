//! The uniform JSON response envelope.
//!
//! Every JSON body the service writes has the same shape:
//!
//! ```json
//! { "success": true, "message": "...", "error_message": "...", "todos": [...] }
//! ```
//!
//! `success` is always present. At most one of the other three fields is
//! populated; absent fields are omitted from the output rather than written
//! as `null`.

use serde::{Deserialize, Serialize};
use tasklist_core::Todo;

/// Fixed user-facing messages.
pub mod messages {
    /// Listing an empty store.
    pub const NO_TODOS: &str = "You have no todos. Try adding one.";
    /// Successful create.
    pub const TODO_CREATED: &str = "Todo was created successfully.";
    /// Body failed to decode (malformed JSON or unknown field).
    pub const INVALID_BODY: &str =
        "Invalid request data. Please ensure your request is properly formatted.";
    /// Path id is not an integer (update and complete).
    pub const INVALID_ID: &str =
        "There was a problem with the todo id, please fix it then try again.";
    /// Well-formed id with no matching record (update and complete).
    pub const NOT_FOUND: &str =
        "We could not find any todo with this id, double check and try again.";
    /// Path id is not an integer (delete).
    pub const DELETE_INVALID_ID: &str =
        "There was a problem with the todo ID, please fix it and try again.";
    /// Well-formed id with no matching record (delete).
    pub const DELETE_NOT_FOUND: &str =
        "We could not find any todo with this ID, double-check and try again.";
    /// A handler panicked.
    pub const INTERNAL: &str = "Internal server error";
}

/// Response envelope (JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request succeeded.
    pub success: bool,

    /// Informational message on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable error on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Records, for list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<Todo>>,
}

impl ApiResponse {
    /// Bare success with no payload.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            message: None,
            error_message: None,
            todos: None,
        }
    }

    /// Success carrying an informational message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok()
        }
    }

    /// Success carrying the record list.
    #[must_use]
    pub fn todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Some(todos),
            ..Self::ok()
        }
    }

    /// Failure carrying an error message.
    #[must_use]
    pub fn error(error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(error_message.into()),
            ..Self::default()
        }
    }
}
