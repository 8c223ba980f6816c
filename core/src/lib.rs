//! # Tasklist Core
//!
//! Pure domain logic for the tasklist service.
//!
//! The crate follows the "Functional Core, Imperative Shell" split: everything
//! here is synchronous, deterministic and free of I/O. The runtime crate owns
//! the state behind a lock and the web crate maps HTTP onto actions.
//!
//! ## Core Concepts
//!
//! - **State**: [`TodoState`], the ordered list of records plus the id counter
//! - **Action**: [`TodoAction`], every mutation the service supports
//! - **Reducer**: [`TodoReducer`], `(State, Action) → Output`
//!
//! ## Example
//!
//! ```
//! use tasklist_core::reducer::Reducer;
//! use tasklist_core::{TodoAction, TodoOutcome, TodoReducer, TodoState};
//!
//! let mut state = TodoState::new();
//! let outcome = TodoReducer::new().reduce(
//!     &mut state,
//!     TodoAction::Create {
//!         title: "Go shopping".to_string(),
//!         description: "Buy items".to_string(),
//!         complete: false,
//!     },
//! );
//!
//! assert!(matches!(outcome, Ok(TodoOutcome::Created(ref todo)) if todo.id.get() == 1));
//! assert_eq!(state.count(), 1);
//! ```

pub mod error;
pub mod todo;

/// Reducer module - Pure state transition functions
///
/// Reducers are the only place where state changes. They never block,
/// never perform I/O and return their result synchronously.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Output`: What the caller learns about the transition
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for CounterReducer {
    ///     type State = CounterState;
    ///     type Action = CounterAction;
    ///     type Output = i64;
    ///
    ///     fn reduce(&self, state: &mut CounterState, action: CounterAction) -> i64 {
    ///         match action {
    ///             CounterAction::Increment => state.count += 1,
    ///         }
    ///         state.count
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The result handed back to whoever dispatched the action
        type Output;

        /// Reduce an action into a state change
        ///
        /// Updates `state` in place and reports the outcome. Implementations
        /// must leave `state` untouched when they report a failure.
        fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Self::Output;
    }
}

// Re-export commonly used types
pub use error::TodoError;
pub use todo::{Todo, TodoAction, TodoId, TodoOutcome, TodoReducer, TodoState};
