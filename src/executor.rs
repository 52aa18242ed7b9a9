//! Single-request execution (one attempt, no retry).

use crate::request::PendingRequest;
use crate::response::{parse_response, ParsedResponse};
use crate::transport::Transport;
use crate::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs one [`PendingRequest`] to completion and parses the result.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn execute(&self, request: &PendingRequest) -> Result<ParsedResponse> {
        let start = std::time::Instant::now();
        let raw = self.transport.send(request).await.map_err(|e| {
            warn!(method = %request.method(), url = request.url(), error = %e, "request failed");
            e
        })?;

        let parsed = parse_response(&raw.head, &raw.body)?;
        if let Some(err) = parsed.decode_error() {
            debug!(url = request.url(), error = err, "response body is not valid JSON");
        }
        debug!(
            method = %request.method(),
            url = request.url(),
            status = parsed.status_line(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        Ok(parsed)
    }
}
