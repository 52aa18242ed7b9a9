use crate::executor::RequestExecutor;
use crate::request::PendingRequest;
use crate::response::ParsedResponse;
use crate::{Error, Result};
use futures::StreamExt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Executes a drained queue concurrently.
///
/// Every request is dispatched up front (unless a concurrency bound is set)
/// and the call returns once all of them have finished. `result[i]` always
/// belongs to `requests[i]`, whatever the completion order.
#[derive(Clone)]
pub struct BatchRunner {
    executor: RequestExecutor,
    max_concurrency: Option<usize>,
}

impl BatchRunner {
    pub fn new(executor: RequestExecutor) -> Self {
        Self {
            executor,
            max_concurrency: None,
        }
    }

    /// Cap the number of requests in flight at once. Unset means all of them.
    pub fn with_max_concurrency(mut self, n: Option<usize>) -> Self {
        self.max_concurrency = n.map(|n| n.max(1));
        self
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    pub async fn run(&self, requests: Vec<PendingRequest>) -> Vec<Result<ParsedResponse>> {
        let n = requests.len();
        if n == 0 {
            debug!("empty batch, nothing to dispatch");
            return Vec::new();
        }

        let limit = self.max_concurrency.unwrap_or(n);
        let start = Instant::now();
        info!(requests = n, limit, "dispatching batch");

        let mut slots: Vec<Option<Result<ParsedResponse>>> = (0..n).map(|_| None).collect();
        let mut completions = futures::stream::iter(requests.iter().enumerate())
            .map(|(idx, req)| async move { (idx, self.executor.execute(req).await) })
            .buffer_unordered(limit);

        let mut failures = 0usize;
        while let Some((idx, result)) = completions.next().await {
            if let Err(e) = &result {
                failures += 1;
                warn!(index = idx, url = requests[idx].url(), error = %e, "batch item failed");
            }
            slots[idx] = Some(result);
        }

        info!(
            requests = n,
            failures,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch collected"
        );

        slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Err(Error::runtime("batch result missing"))))
            .collect()
    }
}
