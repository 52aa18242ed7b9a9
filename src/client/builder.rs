use crate::client::blocking;
use crate::client::core::Client;
use crate::transport::{HttpTransport, Transport, TransportConfig};
use crate::Result;
use std::sync::Arc;
use tracing::warn;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable. Settings left unset fall
/// back to env:
/// - `HTTP_BATCH_PROXY_URL` (proxy for every request)
/// - `HTTP_BATCH_MAX_CONCURRENCY` (batch in-flight bound, unbounded by default)
pub struct ClientBuilder {
    host: String,
    user_agent: Option<String>,
    proxy: Option<String>,
    max_concurrency: Option<usize>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user_agent: None,
            proxy: None,
            max_concurrency: None,
            transport: None,
        }
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Route every request through this proxy. An invalid URL fails `build()`.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Limit how many queued requests run at once during `run()`.
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = Some(n.max(1));
        self
    }

    /// Use a custom transport instead of the built-in `reqwest` one.
    ///
    /// `user_agent` and `proxy` are ignored when a transport is injected.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the async client.
    pub fn build(self) -> Result<Client> {
        let transport = match self.transport {
            Some(t) => t,
            None => {
                let mut config = TransportConfig::default();
                if let Some(ua) = self.user_agent {
                    config.user_agent = ua;
                }
                config.proxy = self.proxy.or_else(proxy_from_env);
                Arc::new(HttpTransport::new(&config)?) as Arc<dyn Transport>
            }
        };

        let max_concurrency = self.max_concurrency.or_else(|| {
            std::env::var("HTTP_BATCH_MAX_CONCURRENCY")
                .ok()?
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
        });

        Ok(Client::from_parts(self.host, transport, max_concurrency))
    }

    /// Build a client whose calls block the current thread.
    pub fn build_blocking(self) -> Result<blocking::Client> {
        blocking::Client::from_async(self.build()?)
    }
}

fn proxy_from_env() -> Option<String> {
    let url = std::env::var("HTTP_BATCH_PROXY_URL").ok()?;
    match reqwest::Proxy::all(&url) {
        Ok(_) => Some(url),
        Err(e) => {
            warn!(proxy = %url, error = %e, "ignoring invalid HTTP_BATCH_PROXY_URL");
            None
        }
    }
}
