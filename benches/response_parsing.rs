//! Benchmarks for the pure request/response path and batch fan-out
//!
//! This benchmark measures:
//! - Header block parsing and JSON body decoding
//! - Request building with query-string encoding
//! - Batch collection overhead with an in-memory transport

use async_trait::async_trait;
use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

use http_batch::{
    parse_response, BatchRunner, Method, PendingRequest, RawResponse, RequestBuilder,
    RequestExecutor, Transport, TransportError,
};

fn sample_head(extra_headers: usize) -> String {
    let mut head = String::from("HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n");
    for i in 0..extra_headers {
        head.push_str(&format!("x-header-{i}: value-{i}\r\n"));
    }
    head.push_str("\r\n");
    head
}

fn sample_body(items: usize) -> Vec<u8> {
    let items: Vec<serde_json::Value> = (0..items)
        .map(|i| serde_json::json!({ "id": i, "name": format!("item {i}"), "tags": ["a", "b"] }))
        .collect();
    serde_json::to_vec(&serde_json::json!({ "items": items })).unwrap()
}

fn bench_parse_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_response");

    for (headers, items) in [(4, 1), (16, 50), (64, 500)] {
        let head = sample_head(headers);
        let body = sample_body(items);
        group.throughput(Throughput::Bytes((head.len() + body.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("parse", format!("{headers}h_{items}i")),
            &(head, body),
            |b, (head, body)| b.iter(|| parse_response(black_box(head), black_box(body)).unwrap()),
        );
    }

    group.finish();
}

fn bench_build_request(c: &mut Criterion) {
    let params: Vec<(String, String)> = (0..20)
        .map(|i| (format!("key{i}"), format!("value with spaces {i}")))
        .collect();
    let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

    c.bench_function("build_get_with_query", |b| {
        b.iter(|| {
            RequestBuilder::build(
                Method::Get,
                black_box("https://api.example.com/search?lang=en"),
                &[("Accept", "application/json")],
                black_box(&params),
            )
        })
    });
}

struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    async fn send(&self, _request: &PendingRequest) -> Result<RawResponse, TransportError> {
        Ok(RawResponse {
            head: "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\r\n".to_string(),
            body: Bytes::from_static(br#"{"ok":true}"#),
        })
    }
}

fn bench_batch_run(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let runner = BatchRunner::new(RequestExecutor::new(Arc::new(EchoTransport)));
    let mut group = c.benchmark_group("batch_run");

    for n in [1usize, 10, 100] {
        let requests: Vec<PendingRequest> = (0..n)
            .map(|i| RequestBuilder::build(Method::Get, &format!("http://svc/{i}"), &[], &[]))
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &requests, |b, requests| {
            b.to_async(&rt).iter(|| runner.run(requests.clone()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_response, bench_build_request, bench_batch_run);
criterion_main!(benches);
