//! Custom Axum extractors.
//!
//! Both extractors reject with [`AppError`], so a bad request is answered
//! with the failure envelope instead of axum's plain-text rejections:
//! - [`StrictJson`]: JSON body, whatever the `Content-Type`; a decode failure is `INVALID_BODY`
//! - [`TodoIdPath`]: integer `{id}` path segment; anything else is `INVALID_ID`
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(
//!     State(state): State<AppState>,
//!     TodoIdPath(id): TodoIdPath,
//!     StrictJson(body): StrictJson<TodoRequest>,
//! ) -> Result<StatusCode, AppError> {
//!     ...
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tasklist_core::TodoId;

/// Body accepted by the create and update routes.
///
/// Unknown fields are rejected. Missing fields default to empty text and
/// `false`. `id` and `complete` are recognised so that a client echoing a
/// listed record back is not rejected, but the handlers ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TodoRequest {
    /// Ignored; ids are assigned by the store.
    #[serde(default, alias = "ID")]
    pub id: Option<i64>,
    /// Title text.
    #[serde(default)]
    pub title: String,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Ignored; completion goes through its own route.
    #[serde(default, alias = "Complete")]
    pub complete: bool,
}

/// JSON body extractor that answers decode failures with the failure envelope.
///
/// The `Content-Type` header is not consulted. The body must start with one
/// JSON value of type `T`; anything after that value is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::invalid_body().with_source(anyhow::anyhow!(rejection.body_text()))
        })?;

        decode_first_value(&bytes).map(Self)
    }
}

/// Decode the first JSON value in `bytes`.
///
/// An empty body is a decode failure.
fn decode_first_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => Err(AppError::invalid_body().with_source(err.into())),
        None => Err(AppError::invalid_body().with_source(anyhow::anyhow!("empty body"))),
    }
}

/// The `{id}` path parameter parsed as a [`TodoId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoIdPath(pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::invalid_id().with_source(anyhow::anyhow!(rejection.body_text()))
            })?;

        parse_todo_id(&raw).map(Self).ok_or_else(|| {
            AppError::invalid_id().with_source(anyhow::anyhow!("not an integer: {raw:?}"))
        })
    }
}

/// Parse a decimal integer id, optional leading sign included.
///
/// Non-positive values parse successfully; they are simply never found.
#[must_use]
pub fn parse_todo_id(raw: &str) -> Option<TodoId> {
    raw.parse::<i64>().ok().map(TodoId::new)
}
