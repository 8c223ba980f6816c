//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use tasklist_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for output assertion functions
type OutputAssertion<O> = Box<dyn FnOnce(&O)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use tasklist_testing::ReducerTest;
///
/// ReducerTest::new(TodoReducer::new())
///     .given_state(TodoState::new())
///     .given_actions(vec![fixtures::create("a", "b")])
///     .when_action(fixtures::delete(1))
///     .then_state(|state| {
///         assert!(state.is_empty());
///     })
///     .then_output(|output| {
///         assert!(output.is_ok());
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    setup_actions: Vec<R::Action>,
    action: Option<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    output_assertions: Vec<OutputAssertion<R::Output>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            setup_actions: Vec::new(),
            action: None,
            state_assertions: Vec::new(),
            output_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Actions applied to the initial state before the one under test (Given)
    ///
    /// Their outputs are discarded.
    #[must_use]
    pub fn given_actions(mut self, actions: Vec<R::Action>) -> Self {
        self.setup_actions = actions;
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the reducer output (Then)
    #[must_use]
    pub fn then_output<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::Output) + 'static,
    {
        self.output_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state or action is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        for setup in self.setup_actions {
            let _ = self.reducer.reduce(&mut state, setup);
        }

        let output = self.reducer.reduce(&mut state, action);

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.output_assertions {
            assertion(&output);
        }
    }
}

/// Helper assertions for todo reducer outputs
pub mod assertions {
    use tasklist_core::{TodoError, TodoOutcome};

    type Output = Result<TodoOutcome, TodoError>;

    /// Assert that the action reported a missing record
    ///
    /// # Panics
    ///
    /// Panics if the output is not `Err(TodoError::NotFound(_))`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_not_found(output: &Output) {
        assert!(
            matches!(output, Err(TodoError::NotFound(_))),
            "Expected not-found, but got {output:?}"
        );
    }

    /// Assert that a todo was created
    ///
    /// # Panics
    ///
    /// Panics if the output is not `Ok(TodoOutcome::Created(_))`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_created(output: &Output) {
        assert!(
            matches!(output, Ok(TodoOutcome::Created(_))),
            "Expected a created todo, but got {output:?}"
        );
    }

    /// Assert that a todo was updated
    ///
    /// # Panics
    ///
    /// Panics if the output is not `Ok(TodoOutcome::Updated(_))`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_updated(output: &Output) {
        assert!(
            matches!(output, Ok(TodoOutcome::Updated(_))),
            "Expected an updated todo, but got {output:?}"
        );
    }

    /// Assert that a todo was completed
    ///
    /// # Panics
    ///
    /// Panics if the output is not `Ok(TodoOutcome::Completed(_))`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_completed(output: &Output) {
        assert!(
            matches!(output, Ok(TodoOutcome::Completed(_))),
            "Expected a completed todo, but got {output:?}"
        );
    }

    /// Assert that a todo was deleted
    ///
    /// # Panics
    ///
    /// Panics if the output is not `Ok(TodoOutcome::Deleted(_))`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_deleted(output: &Output) {
        assert!(
            matches!(output, Ok(TodoOutcome::Deleted(_))),
            "Expected a deleted todo, but got {output:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Output = i32;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) -> i32 {
            match action {
                TestAction::Increment => state.count += 1,
                TestAction::Decrement => state.count -= 1,
            }
            state.count
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_output(|output| {
                assert_eq!(*output, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_setup_actions() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .given_actions(vec![TestAction::Increment, TestAction::Increment])
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 6);
            })
            .run();
    }
}
