//! General-purpose middleware for the API.
//!
//! This module contains reusable middleware components that apply to the
//! whole router, independent of authentication.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status, and latency for every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::debug!(
        %method,
        path = %path,
        status = %response.status(),
        elapsed = ?start.elapsed(),
        "request completed"
    );
    response
}
