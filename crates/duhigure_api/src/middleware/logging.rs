//! Request logging middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use log::{info, warn};
use std::time::{Duration, Instant};

const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(250);

/// Logs method, path, status and latency for every request.
///
/// Only the path is logged; query strings and bodies may carry contact data.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let elapsed = started_at.elapsed();

    if elapsed > SLOW_REQUEST_THRESHOLD {
        warn!(
            "event=http_request module=api status=slow method={} path={} http_status={} duration_ms={}",
            method,
            path,
            response.status().as_u16(),
            elapsed.as_millis()
        );
    } else {
        info!(
            "event=http_request module=api status=ok method={} path={} http_status={} duration_ms={}",
            method,
            path,
            response.status().as_u16(),
            elapsed.as_millis()
        );
    }

    response
}
