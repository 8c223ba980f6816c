//! Todo endpoints.
//!
//! Each handler validates its input through the extractors, turns it into a
//! [`TodoAction`] (or a state read) and maps the outcome onto a status code
//! and envelope. No handler touches the store outside `send`/`state`.

use crate::envelope::{messages, ApiResponse};
use crate::error::AppError;
use crate::extractors::{StrictJson, TodoIdPath, TodoRequest};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use tasklist_core::TodoAction;

/// List all todos.
///
/// # Endpoint
///
/// ```text
/// GET /todos
/// ```
///
/// # Response
///
/// `200 OK`, with either the records in insertion order or, when there are
/// none, an informational message:
///
/// ```json
/// { "success": true, "todos": [{ "ID": 1, "title": "...", "description": "...", "Complete": false }] }
/// { "success": true, "message": "You have no todos. Try adding one." }
/// ```
pub async fn list_todos(State(state): State<AppState>) -> Json<ApiResponse> {
    let todos = state.store().state(|s| s.todos().to_vec()).await;

    if todos.is_empty() {
        Json(ApiResponse::message(messages::NO_TODOS))
    } else {
        Json(ApiResponse::todos(todos))
    }
}

/// Create a todo.
///
/// # Endpoint
///
/// ```text
/// POST /create/todo
/// Content-Type: application/json
///
/// { "title": "Go shopping", "description": "Buy items" }
/// ```
///
/// # Response
///
/// `201 Created` (or `400` in legacy mode) with
/// `{ "success": true, "message": "Todo was created successfully." }`.
/// A body that does not decode answers `400` with the failure envelope.
pub async fn create_todo(
    State(state): State<AppState>,
    StrictJson(body): StrictJson<TodoRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    let outcome = state
        .store()
        .send(TodoAction::Create {
            title: body.title,
            description: body.description,
            complete: false,
        })
        .await?;

    tracing::info!(id = %outcome.todo().id, "Todo created");

    Ok((
        state.create_status(),
        Json(ApiResponse::message(messages::TODO_CREATED)),
    ))
}

/// Update the title and description of a todo.
///
/// An empty `title` keeps the current title; `description` always replaces
/// the stored one.
///
/// # Endpoint
///
/// ```text
/// PUT /update/todo/{id}
/// Content-Type: application/json
///
/// { "title": "Go shopping", "description": "" }
/// ```
///
/// # Response
///
/// `204 No Content` on success; `400` with the failure envelope for a bad
/// body, a bad id or an unknown id. The body is checked before the id, so a
/// request with both wrong reports the body.
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<TodoIdPath, AppError>,
    StrictJson(body): StrictJson<TodoRequest>,
) -> Result<StatusCode, AppError> {
    let TodoIdPath(id) = id?;

    state
        .store()
        .send(TodoAction::Update {
            id,
            title: body.title,
            description: body.description,
        })
        .await?;

    tracing::info!(%id, "Todo updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a todo as complete.
///
/// Completing an already complete todo succeeds again.
///
/// # Endpoint
///
/// ```text
/// PATCH /complete/{id}
/// ```
///
/// # Response
///
/// `204 No Content` on success; `400` with the failure envelope for a bad or
/// unknown id.
pub async fn complete_todo(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<StatusCode, AppError> {
    state.store().send(TodoAction::Complete { id }).await?;

    tracing::info!(%id, "Todo completed");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a todo.
///
/// # Endpoint
///
/// ```text
/// DELETE /delete/{id}
/// ```
///
/// # Response
///
/// `204 No Content` on success; `400` with the failure envelope for a bad or
/// unknown id. This route words its two error messages differently from
/// update and complete.
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<TodoIdPath, AppError>,
) -> Result<StatusCode, AppError> {
    let TodoIdPath(id) = id.map_err(|err| err.with_message(messages::DELETE_INVALID_ID))?;

    state
        .store()
        .send(TodoAction::Delete { id })
        .await
        .map_err(|err| AppError::from(err).with_message(messages::DELETE_NOT_FOUND))?;

    tracing::info!(%id, "Todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
