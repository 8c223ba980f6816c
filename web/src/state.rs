//! Application state for Axum handlers.
//!
//! One [`AppState`] is built at startup and cloned into every handler. All
//! clones share the same [`TodoStore`], so the store lives exactly as long as
//! the process and tests can hand in a store of their own.

use axum::http::StatusCode;
use std::sync::Arc;
use tasklist_core::{TodoReducer, TodoState};
use tasklist_runtime::metrics::MetricsRecorder;
use tasklist_runtime::TodoStore;

/// Application state shared across all HTTP handlers.
///
/// # Examples
///
/// ```
/// use tasklist_core::{TodoReducer, TodoState};
/// use tasklist_runtime::TodoStore;
/// use tasklist_web::AppState;
///
/// let state = AppState::new(TodoStore::new(TodoState::new(), TodoReducer::new()))
///     .with_legacy_create_status(false);
/// assert_eq!(state.create_status().as_u16(), 201);
/// ```
#[derive(Clone)]
pub struct AppState {
    store: TodoStore,
    create_status: StatusCode,
    metrics: Option<Arc<MetricsRecorder>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TodoStore::new(TodoState::new(), TodoReducer::new()))
    }
}

impl AppState {
    /// Create application state around an existing store.
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self {
            store,
            create_status: StatusCode::CREATED,
            metrics: None,
        }
    }

    /// Answer successful creates with `400 Bad Request` instead of `201 Created`.
    ///
    /// Older clients expect `400` on the success path. The body is the
    /// success envelope either way.
    #[must_use]
    pub fn with_legacy_create_status(mut self, legacy: bool) -> Self {
        self.create_status = if legacy {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::CREATED
        };
        self
    }

    /// Expose `GET /metrics` backed by this recorder.
    #[must_use]
    pub fn with_metrics(mut self, recorder: Arc<MetricsRecorder>) -> Self {
        self.metrics = Some(recorder);
        self
    }

    /// The shared todo store.
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Status code for a successful create.
    #[must_use]
    pub const fn create_status(&self) -> StatusCode {
        self.create_status
    }

    /// Installed metrics recorder, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&MetricsRecorder> {
        self.metrics.as_deref()
    }
}
