use crate::transport::TransportError;
use thiserror::Error;

/// Which builder setting or call argument was rejected, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// `proxy` or `method`
    pub field_path: Option<String>,
    /// Rejected value or the parser's message
    pub details: Option<String>,
    /// `http_transport`, `client_builder`
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the crate.
///
/// Batch execution never returns this for the whole batch; each queued
/// request carries its own `Result`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed response: {message} (line: {line:?})")]
    MalformedResponse { message: String, line: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Runtime error: {message}{}", format_context(.context))]
    Runtime {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::Runtime {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn malformed(msg: impl Into<String>, line: impl Into<String>) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
            line: line.into(),
        }
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::Runtime { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status code behind a transport failure, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }
}
