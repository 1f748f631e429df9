/*
[INPUT]:  Caller deadline and cancellation token
[OUTPUT]: Per-request timeout and abort signal for ApiClient
[POS]:    HTTP layer - request cancellation
[UPDATE]: When changing how requests are bounded or aborted
*/

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::http::{Result, UqpayError};

/// Deadline and cancellation applied to every request made through a client
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides `ClientConfig::timeout` for each request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Drive `fut` to completion unless the token fires first
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(UqpayError::Cancelled),
                    result = fut => result,
                }
            }
            None => fut.await,
        }
    }
}
