//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of short text records. Records keep
//! their insertion order; ids come from a counter that only ever moves
//! forward, so an id is never handed out twice even after deletes.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Ids are minted by [`TodoState`] starting at 1. The inner value is signed
/// because ids arrive from the outside world (path segments) and a caller may
/// ask for `-3`; such an id is simply never found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// Serialized with the keys `ID`, `title`, `description` and `Complete`;
/// the lowercase `id` and `complete` are accepted when reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier assigned at creation
    #[serde(rename = "ID", alias = "id")]
    pub id: TodoId,
    /// Short title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Whether the todo has been completed
    #[serde(rename = "Complete", alias = "complete")]
    pub complete: bool,
}

impl Todo {
    /// Creates a new todo item
    #[must_use]
    pub const fn new(id: TodoId, title: String, description: String, complete: bool) -> Self {
        Self {
            id,
            title,
            description,
            complete,
        }
    }
}

/// State of the todo list
///
/// Holds the records in insertion order and the next id to mint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoState {
    todos: Vec<Todo>,
    next_id: i64,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoState {
    /// Creates a new empty state whose first id will be 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// The id the next created todo will receive
    #[must_use]
    pub const fn next_id(&self) -> TodoId {
        TodoId(self.next_id)
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` when there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.complete).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Position of the first todo carrying `id`
    #[must_use]
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    pub(crate) fn push(&mut self, title: String, description: String, complete: bool) -> &Todo {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo::new(id, title, description, complete));
        &self.todos[self.todos.len() - 1]
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Todo {
        self.todos.remove(index)
    }
}

/// Actions understood by the todo reducer
///
/// Every variant is a command; listing is a plain read of [`TodoState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new todo with a freshly minted id
    Create {
        /// Title of the todo
        title: String,
        /// Description of the todo
        description: String,
        /// Initial completion flag
        complete: bool,
    },

    /// Edit the text of an existing todo
    ///
    /// An empty `title` leaves the title alone; `description` always
    /// replaces the stored one, even when empty.
    Update {
        /// Todo to edit
        id: TodoId,
        /// New title, empty for "unchanged"
        title: String,
        /// New description
        description: String,
    },

    /// Mark a todo as complete
    Complete {
        /// Todo to complete
        id: TodoId,
    },

    /// Remove a todo
    Delete {
        /// Todo to delete
        id: TodoId,
    },
}

impl TodoAction {
    /// Short name used in logs and metrics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Complete { .. } => "complete",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Successful result of applying a [`TodoAction`]
///
/// Each variant carries a snapshot of the affected record after the change
/// (or, for deletes, as it was just before removal).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoOutcome {
    /// A todo was created
    Created(Todo),
    /// A todo was updated
    Updated(Todo),
    /// A todo was marked complete
    Completed(Todo),
    /// A todo was removed
    Deleted(Todo),
}

impl TodoOutcome {
    /// The record the outcome refers to
    #[must_use]
    pub const fn todo(&self) -> &Todo {
        match self {
            Self::Created(todo) | Self::Updated(todo) | Self::Completed(todo) | Self::Deleted(todo) => {
                todo
            }
        }
    }
}
