//! Transport seam: the only place that touches the network.
//!
//! [`HttpTransport`] is the `reqwest` implementation. Custom transports can be
//! injected through [`crate::ClientBuilder::transport`].

mod http;
#[cfg(test)]
pub(crate) mod scripted;

pub use http::{HttpTransport, TransportConfig};

use crate::request::PendingRequest;
use async_trait::async_trait;
use bytes::Bytes;

/// Raw result of one transport round-trip.
///
/// `head` is the HTTP header block (status line plus `name: value` lines,
/// CRLF separated, terminated by a blank line).
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub head: String,
    pub body: Bytes,
}

/// Issues a single HTTP request.
///
/// Implementations must report non-2xx responses as errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PendingRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Other(_) => None,
        }
    }
}
