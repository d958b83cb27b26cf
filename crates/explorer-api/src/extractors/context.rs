//! `RequestCtx` extractor: builds the per-request service context.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use explorer_service::RequestContext;

use crate::state::AppState;

/// Header carrying a caller-supplied correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Service context for the current request.
///
/// The request ID is taken from `x-request-id` when present, otherwise a
/// fresh UUID. The deadline is `server.request_timeout_seconds` from now,
/// and the cancellation token is a child of the server shutdown token.
#[derive(Debug, Clone)]
pub struct RequestCtx(pub RequestContext);

impl std::ops::Deref for RequestCtx {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for RequestCtx {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

        let ctx = RequestContext::new(request_id)
            .with_timeout(timeout)
            .with_cancellation(state.shutdown.child_token());

        Ok(RequestCtx(ctx))
    }
}
