//! In-memory transport for unit tests.

use super::{RawResponse, Transport, TransportError};
use crate::request::PendingRequest;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

enum Route {
    Reply {
        delay: Duration,
        head: String,
        body: Bytes,
    },
    Fail {
        delay: Duration,
        status: u16,
    },
}

/// Answers requests by exact URL, after an optional delay, and records the
/// order in which requests finished.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    routes: HashMap<String, Route>,
    completed: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, url: &str, delay_ms: u64, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Route::Reply {
                delay: Duration::from_millis(delay_ms),
                head: format!("HTTP/1.1 200 OK\r\nX-Url: {url}\r\n\r\n"),
                body: Bytes::copy_from_slice(body.as_bytes()),
            },
        );
        self
    }

    pub(crate) fn reply_raw(mut self, url: &str, head: &str, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Route::Reply {
                delay: Duration::ZERO,
                head: head.to_string(),
                body: Bytes::copy_from_slice(body.as_bytes()),
            },
        );
        self
    }

    pub(crate) fn fail(mut self, url: &str, delay_ms: u64, status: u16) -> Self {
        self.routes.insert(
            url.to_string(),
            Route::Fail {
                delay: Duration::from_millis(delay_ms),
                status,
            },
        );
        self
    }

    pub(crate) fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &PendingRequest) -> Result<RawResponse, TransportError> {
        let route = self
            .routes
            .get(request.url())
            .ok_or_else(|| TransportError::Other(format!("connection refused: {}", request.url())))?;

        let result = match route {
            Route::Reply { delay, head, body } => {
                tokio::time::sleep(*delay).await;
                Ok(RawResponse {
                    head: head.clone(),
                    body: body.clone(),
                })
            }
            Route::Fail { delay, status } => {
                tokio::time::sleep(*delay).await;
                Err(TransportError::Status {
                    status: *status,
                    message: format!("the requested URL returned error: {status}"),
                })
            }
        };

        self.completed.lock().unwrap().push(request.url().to_string());
        result
    }
}
