//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use http_batch::{Client, ClientBuilder};
use mockito::{Mock, Server, ServerGuard};

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Create a client whose host is the mock server
    pub fn client(&self) -> Client {
        ClientBuilder::new(&self.base_url)
            .user_agent("http-batch-tests")
            .build()
            .expect("client should build")
    }

    /// Create a mock for a successful JSON response
    pub async fn mock_json(&mut self, method: &str, path: &str, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock for an error response
    pub async fn mock_error(&mut self, method: &str, path: &str, status: usize) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"boom"}"#)
            .create_async()
            .await
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
