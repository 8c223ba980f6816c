//! Reducer logic for the todo list.
//!
//! Lookups are a linear scan over the records in insertion order; the first
//! record with a matching id wins, which is unambiguous because ids are
//! never reused.

use crate::error::TodoError;
use crate::reducer::Reducer;
use crate::todo::types::{Todo, TodoAction, TodoId, TodoOutcome, TodoState};

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn create(state: &mut TodoState, title: String, description: String, complete: bool) -> Todo {
        state.push(title, description, complete).clone()
    }

    fn update(
        state: &mut TodoState,
        id: TodoId,
        title: String,
        description: String,
    ) -> Result<Todo, TodoError> {
        let todo = state.get_mut(id).ok_or(TodoError::NotFound(id))?;

        // An empty title means "keep the current one"; the description has no
        // such escape and is always overwritten.
        if !title.is_empty() && todo.title != title {
            todo.title = title;
        }
        todo.description = description;

        Ok(todo.clone())
    }

    fn complete(state: &mut TodoState, id: TodoId) -> Result<Todo, TodoError> {
        let todo = state.get_mut(id).ok_or(TodoError::NotFound(id))?;
        todo.complete = true;
        Ok(todo.clone())
    }

    fn delete(state: &mut TodoState, id: TodoId) -> Result<Todo, TodoError> {
        let index = state.position(id).ok_or(TodoError::NotFound(id))?;
        Ok(state.remove_at(index))
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Output = Result<TodoOutcome, TodoError>;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Self::Output {
        match action {
            TodoAction::Create {
                title,
                description,
                complete,
            } => Ok(TodoOutcome::Created(Self::create(
                state,
                title,
                description,
                complete,
            ))),
            TodoAction::Update {
                id,
                title,
                description,
            } => Self::update(state, id, title, description).map(TodoOutcome::Updated),
            TodoAction::Complete { id } => Self::complete(state, id).map(TodoOutcome::Completed),
            TodoAction::Delete { id } => Self::delete(state, id).map(TodoOutcome::Deleted),
        }
    }
}
