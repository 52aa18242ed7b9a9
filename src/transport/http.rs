use super::{RawResponse, Transport, TransportError};
use crate::request::{Body, PendingRequest};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::redirect::Policy;
use reqwest::Proxy;
use std::fmt::Write as _;
use tracing::debug;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Settings for the `reqwest` transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub user_agent: String,
    pub proxy: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("http-batch/", env!("CARGO_PKG_VERSION")).to_string(),
            proxy: None,
        }
    }
}

/// `reqwest`-backed transport.
///
/// Idle connections are never kept and redirects are not followed, so every
/// request opens and closes exactly one connection. Any non-2xx response,
/// 3xx included, is turned into an error.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .redirect(Policy::none());

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    "invalid proxy url",
                    ErrorContext::new()
                        .with_field_path("proxy")
                        .with_details(e.to_string())
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PendingRequest) -> std::result::Result<RawResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method().into(), request.url());

        for (name, value) in request.headers() {
            req = req.header(name.as_str(), value.as_str());
        }

        match request.body() {
            Some(Body::Form(fields)) => {
                let form = fields
                    .iter()
                    .fold(Form::new(), |form, (k, v)| form.text(k.clone(), v.clone()));
                req = req.multipart(form);
            }
            Some(Body::Encoded(encoded)) => {
                if !request.has_header(CONTENT_TYPE.as_str()) {
                    req = req.header(CONTENT_TYPE, FORM_URLENCODED);
                }
                req = req.body(encoded.clone());
            }
            None => {}
        }

        debug!(method = %request.method(), url = request.url(), "sending request");

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: format!(
                    "{} {} for url ({})",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Status"),
                    request.url()
                ),
            });
        }
        let head = render_head(&response);
        let body = response.bytes().await?;

        debug!(url = request.url(), bytes = body.len(), "response received");

        Ok(RawResponse { head, body })
    }
}

/// Render the status line and headers as a CRLF header block.
fn render_head(response: &reqwest::Response) -> String {
    let mut head = String::new();
    let _ = write!(head, "{:?} {}\r\n", response.version(), response.status());
    for (name, value) in response.headers() {
        let _ = write!(
            head,
            "{}: {}\r\n",
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes())
        );
    }
    head.push_str("\r\n");
    head
}
