//! Axum HTTP shell for the tasklist service.
//!
//! This crate exposes the todo store over HTTP. It follows the
//! "Functional Core, Imperative Shell" split: the reducer in
//! `tasklist-core` owns every rule, this crate only decodes requests and
//! encodes responses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON
//! │  - Request decoding (strict JSON, ids)  │  ← Panic recovery
//! │  - Response envelopes                   │  ← Request tracing
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - TodoReducer                          │  ← Testable at memory speed
//! │  - TodoState transformations            │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** with [`TodoIdPath`] and [`StrictJson`]
//! 3. **Build Action** from the extracted data
//! 4. **Dispatch** the action through the `Store`
//! 5. **Map result** to a status code and [`ApiResponse`]
//!
//! # Example
//!
//! ```no_run
//! use tasklist_web::{build_router, AppState};
//!
//! # async fn run() -> std::io::Result<()> {
//! let app = build_router(AppState::default());
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use envelope::ApiResponse;
pub use error::AppError;
pub use extractors::{StrictJson, TodoIdPath, TodoRequest};
pub use middleware::{make_request_span, request_id_layer, RequestId, REQUEST_ID_HEADER};
pub use router::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
