//! # http-batch
//!
//! Minimal HTTP client with single verb calls and an order-preserving,
//! concurrently executed request queue.
//!
//! ## Overview
//!
//! A [`Client`] is bound to one base host. Verb methods (`get`, `post`, `put`,
//! `patch`, `delete`) send one request and return its [`ParsedResponse`]:
//! the response headers (status line included) plus the body decoded as JSON.
//! [`Client::queue`] collects requests and [`Client::run`] executes them all
//! at once, returning one result per queued request in queue order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use http_batch::{Client, Method};
//!
//! #[tokio::main]
//! async fn main() -> http_batch::Result<()> {
//!     let mut client = Client::new("https://api.example.com")?;
//!
//!     let user = client.get("/users/1", &[("Accept", "application/json")], &[]).await?;
//!     println!("{} {}", user.status_line(), user.data());
//!
//!     client.queue("/users", Method::Get, &[], &[("page", "1")]);
//!     client.queue("/users", Method::Get, &[], &[("page", "2")]);
//!     for result in client.run().await {
//!         match result {
//!             Ok(page) => println!("{}", page.data()),
//!             Err(e) => eprintln!("request failed: {e}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`request`] | Request construction and parameter encoding |
//! | [`response`] | Header block parsing and JSON body decoding |
//! | [`transport`] | Network seam and the `reqwest` transport |
//! | [`executor`] | Single-request execution |
//! | [`batch`] | Concurrent, order-preserving batch execution |
//! | [`client`] | Async facade, builder and blocking wrapper |

pub mod batch;
pub mod client;
pub mod executor;
pub mod request;
pub mod response;
pub mod transport;

pub use batch::BatchRunner;
pub use client::{Client, ClientBuilder};
pub use executor::RequestExecutor;
pub use request::{Body, Method, PendingRequest, RequestBuilder};
pub use response::{parse_response, ParsedResponse, STATUS_LINE_KEY};
pub use transport::{HttpTransport, RawResponse, Transport, TransportConfig, TransportError};

/// Blocking client, re-exported for `http_batch::blocking::Client`.
pub mod blocking {
    pub use crate::client::blocking::Client;
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
