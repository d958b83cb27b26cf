//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::MethodRouter;
use tracing::{info, warn};

use crate::state::AppState;

/// Logs request method, path, status, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %uri.path(),
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}

/// Wraps a route's handler so each call logs its operation name, outcome
/// and duration. Requests no handler matches (405) are not logged.
pub fn logged(operation: &'static str, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn(move |request: Request, next: Next| {
        log_operation(operation, request, next)
    }))
}

async fn log_operation(operation: &'static str, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_success() {
        info!(operation, status = status.as_u16(), duration_ms, "Operation completed");
    } else {
        warn!(operation, status = status.as_u16(), duration_ms, "Operation failed");
    }

    response
}
