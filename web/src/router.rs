//! HTTP router.
//!
//! Composes the todo handlers into a single Axum router and wraps it in the
//! shell layers (panic recovery, request tracing, request ids).

use crate::envelope::messages;
use crate::error::AppError;
use crate::handlers::{self, metrics::render_metrics};
use crate::middleware::{make_request_span, request_id_layer};
use crate::state::AppState;
use axum::{
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

/// Build the complete router.
///
/// # Routes
///
/// - `GET /todos` - List todos
/// - `POST /create/todo` - Create a todo
/// - `PUT /update/todo/:id` - Update a todo
/// - `PATCH /complete/:id` - Complete a todo
/// - `DELETE /delete/:id` - Delete a todo
/// - `GET /metrics` - Prometheus metrics (only when a recorder is attached)
///
/// # Example
///
/// ```rust,ignore
/// let app = build_router(AppState::default());
/// axum::serve(listener, app).await?;
/// ```
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/todos", get(handlers::list_todos))
        .route("/create/todo", post(handlers::create_todo))
        .route("/update/todo/:id", put(handlers::update_todo))
        .route("/complete/:id", patch(handlers::complete_todo))
        .route("/delete/:id", delete(handlers::delete_todo));

    if state.metrics().is_some() {
        router = router.route("/metrics", get(render_metrics));
    }

    with_shell_layers(router.with_state(state))
}

/// Panic recovery inside, tracing around it so a recovered panic is still
/// logged with its 500 status, request ids outermost so the trace span can
/// read them.
fn with_shell_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(request_id_layer())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    AppError::internal(messages::INTERNAL)
        .with_source(anyhow::anyhow!("handler panicked: {detail}"))
        .into_response()
}
