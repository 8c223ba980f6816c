//! Axum middleware for request ids and request tracing.
//!
//! [`request_id_layer`] gives every request an id:
//!
//! 1. **Extract** the request id from `X-Request-ID` (or generate a UUID)
//! 2. **Store** it in request extensions as [`RequestId`]
//! 3. **Echo** it in the response `X-Request-ID` header
//!
//! Access logging (method, path, status, latency) is done by
//! `tower_http::trace::TraceLayer`; [`make_request_span`] builds its span so
//! every log line of a request carries the request id.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use tasklist_web::middleware::{make_request_span, request_id_layer};
//! use tower_http::trace::TraceLayer;
//!
//! let app = Router::new()
//!     .route("/todos", get(list_todos))
//!     .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
//!     .layer(request_id_layer());
//! ```

use axum::{body::Body, extract::Request, http::HeaderValue, response::Response};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Span;
use uuid::Uuid;

/// Header name for the request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Request id stored in request extensions by [`request_id_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

/// Create a layer that assigns and echoes request ids.
#[must_use]
pub const fn request_id_layer() -> RequestIdLayer {
    RequestIdLayer
}

/// Span for one HTTP request, tagged with its [`RequestId`] when present.
pub fn make_request_span(request: &axum::http::Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|RequestId(id)| id.to_string())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Layer for request id management.
#[derive(Clone, Copy, Debug)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdMiddleware { inner }
    }
}

/// Middleware service for request id management.
#[derive(Clone, Debug)]
pub struct RequestIdMiddleware<S> {
    inner: S,
}

impl<S> Service<Request> for RequestIdMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);

        req.extensions_mut().insert(RequestId(request_id));

        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.await?;

            if let Ok(header_value) = HeaderValue::from_str(&request_id.to_string()) {
                response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
            }

            Ok(response)
        })
    }
}
