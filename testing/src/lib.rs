//! # Tasklist Testing
//!
//! Testing utilities and helpers for the tasklist service.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`fixtures`]: ready-made todo states and actions
//! - [`assertions`]: helpers for checking reducer outputs
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{TodoId, TodoReducer};
//! use tasklist_testing::{assertions, fixtures, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .given_state(fixtures::seeded_state(&[("Go shopping", "Buy items")]))
//!     .when_action(fixtures::complete(1))
//!     .then_state(|state| {
//!         assert!(state.get(TodoId::new(1)).is_some_and(|t| t.complete));
//!     })
//!     .then_output(assertions::assert_completed)
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Prebuilt states and actions for todo tests.
pub mod fixtures {
    use tasklist_core::reducer::Reducer;
    use tasklist_core::{TodoAction, TodoId, TodoReducer, TodoState};

    /// Build a state by creating one todo per `(title, description)` pair.
    ///
    /// Ids are assigned 1, 2, 3, ... in slice order.
    #[must_use]
    pub fn seeded_state(items: &[(&str, &str)]) -> TodoState {
        let reducer = TodoReducer::new();
        let mut state = TodoState::new();
        for (title, description) in items {
            // Create never fails
            let _ = reducer.reduce(&mut state, create(title, description));
        }
        state
    }

    /// A `Create` action with `complete = false`.
    #[must_use]
    pub fn create(title: &str, description: &str) -> TodoAction {
        TodoAction::Create {
            title: title.to_string(),
            description: description.to_string(),
            complete: false,
        }
    }

    /// An `Update` action.
    #[must_use]
    pub fn update(id: i64, title: &str, description: &str) -> TodoAction {
        TodoAction::Update {
            id: TodoId::new(id),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// A `Complete` action.
    #[must_use]
    pub const fn complete(id: i64) -> TodoAction {
        TodoAction::Complete { id: TodoId::new(id) }
    }

    /// A `Delete` action.
    #[must_use]
    pub const fn delete(id: i64) -> TodoAction {
        TodoAction::Delete { id: TodoId::new(id) }
    }
}
