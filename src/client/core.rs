use crate::batch::BatchRunner;
use crate::executor::RequestExecutor;
use crate::request::{Method, PendingRequest, RequestBuilder};
use crate::response::ParsedResponse;
use crate::transport::Transport;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// HTTP client bound to one base host.
///
/// Paths passed to the verb methods and to [`Client::queue`] are appended to
/// the host verbatim. The queue is only valid for one [`Client::run`] cycle.
pub struct Client {
    host: String,
    executor: RequestExecutor,
    batch: BatchRunner,
    queue: Vec<PendingRequest>,
}

impl Client {
    /// Create a client with default settings.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        crate::client::builder::ClientBuilder::new(host).build()
    }

    pub(crate) fn from_parts(
        host: String,
        transport: Arc<dyn Transport>,
        max_concurrency: Option<usize>,
    ) -> Self {
        let executor = RequestExecutor::new(transport);
        let batch = BatchRunner::new(executor.clone()).with_max_concurrency(max_concurrency);
        Self {
            host,
            executor,
            batch,
            queue: Vec::new(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub async fn get(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.request(Method::Get, path, headers, params).await
    }

    pub async fn post(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.request(Method::Post, path, headers, params).await
    }

    pub async fn put(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.request(Method::Put, path, headers, params).await
    }

    pub async fn patch(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.request(Method::Patch, path, headers, params).await
    }

    pub async fn delete(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        self.request(Method::Delete, path, headers, params).await
    }

    /// Build and execute a single request.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> Result<ParsedResponse> {
        let request = RequestBuilder::build(method, &self.url(path), headers, params);
        self.executor.execute(&request).await
    }

    /// Append a request to the batch queue.
    pub fn queue(
        &mut self,
        path: &str,
        method: Method,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) {
        let request = RequestBuilder::build(method, &self.url(path), headers, params);
        debug!(method = %method, url = request.url(), position = self.queue.len(), "queued request");
        self.queue.push(request);
    }

    pub(crate) fn max_concurrency(&self) -> Option<usize> {
        self.batch.max_concurrency()
    }

    /// Number of requests waiting for the next [`Client::run`].
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Execute every queued request concurrently and drain the queue.
    ///
    /// `result[i]` corresponds to the i-th queued request. Individual
    /// failures are reported in their slot; the call itself never fails.
    pub async fn run(&mut self) -> Vec<Result<ParsedResponse>> {
        let requests = std::mem::take(&mut self.queue);
        self.batch.run(requests).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::scripted::ScriptedTransport;
    use serde_json::json;

    fn client(transport: ScriptedTransport) -> Client {
        Client::from_parts("http://api.test".to_string(), Arc::new(transport), None)
    }

    #[tokio::test]
    async fn verb_concatenates_host_and_path() {
        let c = client(
            ScriptedTransport::new().reply("http://api.test/users?id=7", 0, r#"{"id":7}"#),
        );
        let parsed = c.get("/users", &[], &[("id", "7")]).await.unwrap();
        assert_eq!(parsed.data(), &json!({"id": 7}));
        assert_eq!(c.host(), "http://api.test");
    }

    #[tokio::test]
    async fn verb_surfaces_transport_error() {
        let c = client(ScriptedTransport::new().fail("http://api.test/users", 0, 404));
        let err = c.delete("/users", &[], &[]).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn run_drains_queue() {
        let mut c = client(
            ScriptedTransport::new()
                .reply("http://api.test/a", 20, "\"a\"")
                .reply("http://api.test/b", 0, "\"b\""),
        );
        c.queue("/a", Method::Get, &[], &[]);
        c.queue("/b", Method::Put, &[], &[("x", "1")]);
        assert_eq!(c.pending(), 2);

        let results = c.run().await;
        assert_eq!(c.pending(), 0);
        assert_eq!(results[0].as_ref().unwrap().data(), &json!("a"));
        assert_eq!(results[1].as_ref().unwrap().data(), &json!("b"));

        // A second run starts from an empty queue.
        assert!(c.run().await.is_empty());
    }
}
