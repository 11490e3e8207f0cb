//! Transport contracts and the default `reqwest`-backed implementations.
//!
//! A transport moves one fully-formed [`HttpRequest`] over the wire and hands
//! back the complete response. It knows nothing about endpoints, symbols or
//! auth; the session assembles all of that before calling it.

use crate::error::HttpError;
use crate::http::response::RawResponse;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Connect and read timeouts, applied when a transport is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: crate::network::DEFAULT_CONNECT_TIMEOUT,
            read: crate::network::DEFAULT_READ_TIMEOUT,
        }
    }
}

/// A GET request ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Future returned by [`AsyncTransport::execute`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RawResponse, HttpError>> + Send + 'a>>;

/// Transport that blocks the calling thread until the response is complete.
pub trait BlockingTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<RawResponse, HttpError>;
}

/// Transport that yields to the caller's executor while the request is in flight.
///
/// Implementations must tolerate concurrent calls through `&self`.
pub trait AsyncTransport: Send + Sync {
    fn execute<'a>(&'a self, request: HttpRequest) -> TransportFuture<'a>;
}

// ─── reqwest (async) ─────────────────────────────────────────────────────────

/// Non-blocking transport over `reqwest::Client`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    /// Build a client with the given timeouts. Performs no network I/O.
    pub fn new(timeouts: Timeouts) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl AsyncTransport for ReqwestTransport {
    fn execute<'a>(&'a self, request: HttpRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let mut req = self.client.get(&request.url);
            if !request.query.is_empty() {
                req = req.query(&request.query);
            }
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }

            let resp = req.send().await.map_err(map_reqwest)?;
            let status = resp.status().as_u16();
            let headers = collect_headers(resp.headers());
            let body = resp.bytes().await.map_err(map_reqwest)?;

            Ok(RawResponse::new(status, headers, body.to_vec()))
        })
    }
}

// ─── reqwest (blocking) ──────────────────────────────────────────────────────

/// Blocking transport over `reqwest::blocking::Client`.
///
/// Must not be created or dropped from inside an async runtime.
#[cfg(feature = "blocking")]
#[derive(Debug, Clone)]
pub struct ReqwestBlockingTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "blocking")]
impl ReqwestBlockingTransport {
    /// Build a client with the given timeouts. Performs no network I/O.
    ///
    /// `reqwest::blocking` has no read-phase timeout, so `timeouts.read`
    /// bounds the whole request here rather than each read.
    pub fn new(timeouts: Timeouts) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.read)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingTransport for ReqwestBlockingTransport {
    fn execute(&self, request: HttpRequest) -> Result<RawResponse, HttpError> {
        let mut req = self.client.get(&request.url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req.send().map_err(map_reqwest)?;
        let status = resp.status().as_u16();
        let headers = collect_headers(resp.headers());
        let body = resp.bytes().map_err(map_reqwest)?;

        Ok(RawResponse::new(status, headers, body.to_vec()))
    }
}

#[cfg(feature = "http")]
fn map_reqwest(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

#[cfg(feature = "http")]
fn collect_headers(map: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    map.iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect()
}
