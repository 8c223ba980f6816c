//! # Tasklist Runtime
//!
//! Runtime for the tasklist service.
//!
//! This crate provides the [`Store`], the single owner of reducer state for
//! the lifetime of the process. Handlers never touch state directly: they
//! read it through [`Store::state`] and change it through [`Store::send`].
//!
//! ## Concurrency
//!
//! State lives behind one `tokio::sync::RwLock`. `send` holds the write
//! half for the whole reducer call, so mutations are serialized and a
//! concurrent `state` read sees the state either before or after a mutation,
//! never in between. Reducers are short and CPU-bound; the lock is never
//! held across I/O.
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{TodoAction, TodoReducer, TodoState};
//! use tasklist_runtime::Store;
//!
//! # async fn example() {
//! let store = Store::new(TodoState::new(), TodoReducer::new());
//!
//! let created = store
//!     .send(TodoAction::Create {
//!         title: "Buy milk".to_string(),
//!         description: String::new(),
//!         complete: false,
//!     })
//!     .await;
//! assert!(created.is_ok());
//!
//! let count = store.state(|s| s.count()).await;
//! assert_eq!(count, 1);
//! # }
//! ```

pub mod metrics;

use crate::metrics::StoreMetrics;
use std::sync::Arc;
use std::time::Instant;
use tasklist_core::reducer::Reducer;
use tasklist_core::{TodoAction, TodoReducer};
use tokio::sync::RwLock;

/// Actions that can name themselves in logs and metrics.
pub trait NamedAction {
    /// Short, stable name of the action kind
    fn name(&self) -> &'static str;
}

impl NamedAction for TodoAction {
    fn name(&self) -> &'static str {
        Self::name(self)
    }
}

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
///
/// Cloning a `Store` is cheap and yields a handle to the same state.
///
/// # Type Parameters
///
/// - `R`: Reducer implementation; state, action and output types come from it
pub struct Store<R>
where
    R: Reducer,
{
    state: Arc<RwLock<R::State>>,
    reducer: Arc<R>,
}

impl<R> Clone for Store<R>
where
    R: Reducer,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
        }
    }
}

impl<R> Store<R>
where
    R: Reducer + Send + Sync + 'static,
    R::State: Send + Sync + 'static,
    R::Action: NamedAction + Send,
{
    /// Create a new store with initial state and reducer
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
        }
    }

    /// Send an action to the store
    ///
    /// Acquires the write lock, runs the reducer and returns its output. The
    /// lock is released before this method returns.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let outcome = store.send(TodoAction::Complete { id }).await;
    /// ```
    #[tracing::instrument(skip(self, action), name = "store_send", fields(action = action.name()))]
    pub async fn send(&self, action: R::Action) -> R::Output {
        let name = action.name();
        let start = Instant::now();

        let output = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action)
        };

        let elapsed = start.elapsed();
        StoreMetrics::record_action(name, elapsed);
        tracing::debug!(elapsed_us = elapsed.as_micros(), "Action reduced");

        output
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let todo_count = store.state(|s| s.count()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().await;
        StoreMetrics::record_read();
        f(&state)
    }
}

/// Store specialised to the todo list.
pub type TodoStore = Store<TodoReducer>;
