//! Request context carrying the request identity, deadline and cancellation signal.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;

/// Context for a single service call.
///
/// Built by the transport for every inbound request and passed into service
/// methods. Every repository call made on behalf of the request runs through
/// [`RequestContext::run`]; when the deadline passes or the token is
/// cancelled the repository future is dropped, which aborts the in-flight
/// query.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation identifier used in log lines.
    pub request_id: String,
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl RequestContext {
    /// Creates a context with no deadline and a fresh cancellation token.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Sets the deadline to `timeout` from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Ties this context to an externally owned cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Drives `fut` to completion unless the context is cancelled or its
    /// deadline passes first. An already expired or cancelled context fails
    /// without polling `fut`.
    pub async fn run<T, F>(&self, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(self.cancelled_error());
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(self.timeout_error());
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(self.cancelled_error()),
            _ = deadline => Err(self.timeout_error()),
            result = fut => result,
        }
    }

    fn cancelled_error(&self) -> AppError {
        AppError::cancelled(format!("Request {} was cancelled", self.request_id))
    }

    fn timeout_error(&self) -> AppError {
        AppError::timeout(format!("Request {} exceeded its deadline", self.request_id))
    }
}
