//! Blocking wrapper around the async [`crate::Client`].
//!
//! Every call blocks the current thread until the transport returns. The
//! client owns a single-threaded Tokio runtime, so it must not be created,
//! used or dropped from inside another async runtime.

use crate::request::Method;
use crate::response::ParsedResponse;
use crate::Result;
use tokio::runtime::Runtime;

/// Synchronous HTTP client bound to one base host.
pub struct Client {
    inner: crate::client::core::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a blocking client with default settings.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        crate::client::builder::ClientBuilder::new(host).build_blocking()
    }

    pub(crate) fn from_async(inner: crate::client::core::Client) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    pub fn host(&self) -> &str {
        self.inner.host()
    }

    pub fn get(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.runtime.block_on(self.inner.get(path, headers, params))
    }

    pub fn post(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.runtime.block_on(self.inner.post(path, headers, params))
    }

    pub fn put(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.runtime.block_on(self.inner.put(path, headers, params))
    }

    pub fn patch(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.runtime.block_on(self.inner.patch(path, headers, params))
    }

    pub fn delete(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.runtime.block_on(self.inner.delete(path, headers, params))
    }

    pub fn request(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.runtime
            .block_on(self.inner.request(method, path, headers, params))
    }

    pub fn queue(
        &mut self,
        path: &str,
        method: Method,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) {
        self.inner.queue(path, method, headers, params);
    }

    pub fn pending(&self) -> usize {
        self.inner.pending()
    }

    /// Run the queued requests concurrently; blocks until all have finished.
    pub fn run(&mut self) -> Vec<Result<ParsedResponse>> {
        self.runtime.block_on(self.inner.run())
    }
}
