//! Transport session — base URL, bearer auth and an owned transport, in one of
//! two execution modes fixed by the type parameter.
//!
//! `Session<Blocking>` only ever holds a [`BlockingTransport`] and
//! `Session<NonBlocking>` only an [`AsyncTransport`], so a mode/transport
//! mismatch cannot be constructed.

use crate::error::{SdkError, SdkResult};
use crate::http::response::{FromRawResponse, RawResponse};
use crate::http::transport::{AsyncTransport, BlockingTransport, HttpRequest, Timeouts};
use crate::request::EndpointRequest;

use std::fmt;
use std::marker::PhantomData;

/// Runtime tag for the execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Blocking,
    NonBlocking,
}

/// Marker for blocking sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blocking;

/// Marker for non-blocking (async) sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonBlocking;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Blocking {}
    impl Sealed for super::NonBlocking {}
}

/// Binds an execution mode to its transport contract.
pub trait ExecutionMode: sealed::Sealed + Send + Sync + 'static {
    type Transport: ?Sized + Send + Sync;
    const MODE: Mode;
}

impl ExecutionMode for Blocking {
    type Transport = dyn BlockingTransport;
    const MODE: Mode = Mode::Blocking;
}

impl ExecutionMode for NonBlocking {
    type Transport = dyn AsyncTransport;
    const MODE: Mode = Mode::NonBlocking;
}

/// Everything a session needs at construction.
#[derive(Clone)]
pub struct SessionConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl SessionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeouts: Timeouts::default(),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

/// An authenticated connection to the REST API.
///
/// Configuration is immutable after construction. The transport is released
/// exactly once, by [`Session::close`] or on drop; every request afterwards
/// fails with `InvalidState`.
pub struct Session<M: ExecutionMode> {
    base_url: String,
    /// Full `Authorization` header value. NEVER exposed publicly.
    auth_header: String,
    timeouts: Timeouts,
    transport: Option<Box<M::Transport>>,
    _mode: PhantomData<M>,
}

impl<M: ExecutionMode> Session<M> {
    fn from_parts(config: SessionConfig, transport: Box<M::Transport>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Bearer {}", config.api_key),
            timeouts: config.timeouts,
            transport: Some(transport),
            _mode: PhantomData,
        }
    }

    pub fn mode(&self) -> Mode {
        M::MODE
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    /// Release the transport. Calling it again is a no-op.
    pub fn close(&mut self) {
        if let Some(transport) = self.transport.take() {
            drop(transport);
            tracing::debug!(mode = ?M::MODE, base_url = %self.base_url, "session closed");
        }
    }

    /// Resolve a templated request against the base URL.
    fn prepare(&self, request: &EndpointRequest) -> SdkResult<(&M::Transport, HttpRequest)> {
        let url = format!("{}{}", self.base_url, request.path);
        let transport = self.transport()?;
        tracing::trace!(path = %request.path, query = %request.query_string(), "prepared");
        Ok((transport, self.authorize(HttpRequest::get(url).with_query(request.query_pairs()))))
    }

    /// An absolute URL, used as-is.
    fn prepare_absolute(&self, url: &str) -> SdkResult<(&M::Transport, HttpRequest)> {
        let transport = self.transport()?;
        Ok((transport, self.authorize(HttpRequest::get(url))))
    }

    fn transport(&self) -> SdkResult<&M::Transport> {
        self.transport.as_deref().ok_or_else(|| {
            SdkError::InvalidState(format!("{:?} session is closed", M::MODE))
        })
    }

    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        request.with_header("Authorization", self.auth_header.as_str())
    }
}

impl<M: ExecutionMode> Drop for Session<M> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<M: ExecutionMode> fmt::Debug for Session<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("mode", &M::MODE)
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .field("closed", &self.is_closed())
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Blocking
// ═════════════════════════════════════════════════════════════════════════════

impl Session<Blocking> {
    /// Open a blocking session over `reqwest::blocking`. No network I/O.
    #[cfg(feature = "blocking")]
    pub fn open(config: SessionConfig) -> SdkResult<Self> {
        let transport = crate::http::transport::ReqwestBlockingTransport::new(config.timeouts)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Open a blocking session over a caller-supplied transport.
    pub fn with_transport<T: BlockingTransport + 'static>(config: SessionConfig, transport: T) -> Self {
        Self::from_parts(config, Box::new(transport))
    }

    /// Issue one GET for a templated request.
    pub fn execute(&self, request: &EndpointRequest) -> SdkResult<RawResponse> {
        let (transport, http) = self.prepare(request)?;
        Self::send(transport, http)
    }

    /// Issue one GET against an absolute URL, e.g. a `next_url` pointer.
    pub fn fetch_by_absolute_url(&self, url: &str) -> SdkResult<RawResponse> {
        let (transport, http) = self.prepare_absolute(url)?;
        Self::send(transport, http)
    }

    /// Execute and apply the caller's response policy.
    pub fn call<R: FromRawResponse>(&self, request: EndpointRequest) -> SdkResult<R> {
        R::from_raw(self.execute(&request)?)
    }

    fn send(transport: &dyn BlockingTransport, http: HttpRequest) -> SdkResult<RawResponse> {
        tracing::debug!(mode = ?Mode::Blocking, url = %http.url, "GET");
        let raw = transport.execute(http)?;
        tracing::debug!(status = raw.status, bytes = raw.body.len(), "response");
        Ok(raw)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Non-blocking
// ═════════════════════════════════════════════════════════════════════════════

impl Session<NonBlocking> {
    /// Open a non-blocking session over `reqwest`. No network I/O.
    #[cfg(feature = "http")]
    pub fn open(config: SessionConfig) -> SdkResult<Self> {
        let transport = crate::http::transport::ReqwestTransport::new(config.timeouts)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Open a non-blocking session over a caller-supplied transport.
    pub fn with_transport<T: AsyncTransport + 'static>(config: SessionConfig, transport: T) -> Self {
        Self::from_parts(config, Box::new(transport))
    }

    /// Issue one GET for a templated request.
    pub async fn execute(&self, request: &EndpointRequest) -> SdkResult<RawResponse> {
        let (transport, http) = self.prepare(request)?;
        Self::send(transport, http).await
    }

    /// Issue one GET against an absolute URL, e.g. a `next_url` pointer.
    pub async fn fetch_by_absolute_url(&self, url: &str) -> SdkResult<RawResponse> {
        let (transport, http) = self.prepare_absolute(url)?;
        Self::send(transport, http).await
    }

    /// Execute and apply the caller's response policy.
    pub async fn call<R: FromRawResponse>(&self, request: EndpointRequest) -> SdkResult<R> {
        R::from_raw(self.execute(&request).await?)
    }

    async fn send(transport: &dyn AsyncTransport, http: HttpRequest) -> SdkResult<RawResponse> {
        tracing::debug!(mode = ?Mode::NonBlocking, url = %http.url, "GET");
        let raw = transport.execute(http).await?;
        tracing::debug!(status = raw.status, bytes = raw.body.len(), "response");
        Ok(raw)
    }
}
