//! Batched execution: run a queue of requests concurrently and collect one
//! result per request, in queue order.
//!
//! A failing item never aborts its siblings; it simply occupies its own slot
//! as an `Err`.

mod runner;

pub use runner::BatchRunner;
