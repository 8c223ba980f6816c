//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod metrics;
pub mod todos;

// Re-export common handlers
pub use todos::{complete_todo, create_todo, delete_todo, list_todos, update_todo};
