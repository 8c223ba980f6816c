//! Domain errors.

use crate::todo::TodoId;
use thiserror::Error;

/// Errors produced by the todo reducer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No live record carries this id.
    #[error("todo with id {0} not found")]
    NotFound(TodoId),
}
