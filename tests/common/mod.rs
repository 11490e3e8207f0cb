//! In-memory transports shared by the integration tests.
//!
//! Every request is recorded; the response is a canned `RawResponse`. No test
//! touches the network.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use polygon_sdk::prelude::*;
use polygon_sdk::http::TransportFuture;

pub const TEST_KEY: &str = "test-key";
pub const TEST_BASE: &str = "https://api.polygon.test";

/// Shared handle onto what a transport saw.
#[derive(Clone, Default)]
pub struct Log {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    drops: Arc<AtomicUsize>,
}

impl Log {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request recorded")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// What the transport answers with.
#[derive(Clone)]
pub enum Reply {
    Respond(RawResponse),
    Fail,
    TimeOut,
}

pub struct MockTransport {
    log: Log,
    reply: Reply,
    /// Per-request delay for the async transport, keyed off the URL.
    delay: fn(&str) -> Duration,
}

impl MockTransport {
    pub fn new(log: &Log, reply: Reply) -> Self {
        Self {
            log: log.clone(),
            reply,
            delay: |_| Duration::ZERO,
        }
    }

    pub fn json(log: &Log, body: &str) -> Self {
        Self::new(log, Reply::Respond(json_response(200, body)))
    }

    pub fn with_delay(mut self, delay: fn(&str) -> Duration) -> Self {
        self.delay = delay;
        self
    }

    fn answer(&self, request: HttpRequest) -> Result<RawResponse, HttpError> {
        self.log.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Respond(raw) => Ok(raw.clone()),
            Reply::Fail => Err(HttpError::Transport("connection refused".into())),
            Reply::TimeOut => Err(HttpError::Timeout),
        }
    }
}

impl Drop for MockTransport {
    fn drop(&mut self) {
        self.log.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl BlockingTransport for MockTransport {
    fn execute(&self, request: HttpRequest) -> Result<RawResponse, HttpError> {
        self.answer(request)
    }
}

impl AsyncTransport for MockTransport {
    fn execute<'a>(&'a self, request: HttpRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let delay = (self.delay)(&request.url);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.answer(request)
        })
    }
}

pub fn json_response(status: u16, body: &str) -> RawResponse {
    RawResponse::new(
        status,
        vec![("content-type".into(), "application/json".into())],
        body.as_bytes().to_vec(),
    )
}

fn builder() -> PolygonClientBuilder {
    PolygonClientBuilder::default()
        .api_key(TEST_KEY)
        .base_url(TEST_BASE)
}

pub fn blocking_client(log: &Log) -> BlockingClient {
    builder()
        .build_blocking_with(MockTransport::json(log, r#"{"status":"OK"}"#))
        .unwrap()
}

pub fn async_client(log: &Log) -> AsyncClient {
    builder()
        .build_async_with(MockTransport::json(log, r#"{"status":"OK"}"#))
        .unwrap()
}

pub fn blocking_client_with(transport: MockTransport) -> BlockingClient {
    builder().build_blocking_with(transport).unwrap()
}

pub fn async_client_with(transport: MockTransport) -> AsyncClient {
    builder().build_async_with(transport).unwrap()
}

/// Path of a recorded request, relative to the test base URL.
pub fn path_of(request: &HttpRequest) -> &str {
    request
        .url
        .strip_prefix(TEST_BASE)
        .unwrap_or(request.url.as_str())
}

/// Query of a recorded request as borrowed pairs.
pub fn query_of(request: &HttpRequest) -> Vec<(&str, &str)> {
    request
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}
