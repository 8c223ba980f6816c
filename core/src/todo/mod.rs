//! The todo aggregate: records, actions and the reducer that applies them.

pub mod reducer;
pub mod types;

pub use reducer::TodoReducer;
pub use types::{Todo, TodoAction, TodoId, TodoOutcome, TodoState};
