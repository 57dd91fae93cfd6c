//! Request timing middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log the wall-clock time spent on each request. Not exposed to clients.
pub async fn log_request_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "Processing time: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    response
}
