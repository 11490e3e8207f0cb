//! High-level client — `PolygonClient` with nested sub-client accessors.
//!
//! Each market has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the owned session, and accessor methods.

use crate::domain::crypto::client::Crypto;
use crate::domain::forex::client::Forex;
use crate::error::{SdkError, SdkResult};
use crate::http::{
    AsyncTransport, Blocking, BlockingTransport, ExecutionMode, FromRawResponse, Mode, NonBlocking,
    Session, SessionConfig, Timeouts,
};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::crypto::client::Crypto as CryptoClient;
pub use crate::domain::forex::client::Forex as ForexClient;

/// Blocking client: every call returns when the response is complete.
pub type BlockingClient = PolygonClient<Blocking>;

/// Async client: every call returns a future.
pub type AsyncClient = PolygonClient<NonBlocking>;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each market:
/// `client.crypto()`, `client.forex()`. The execution mode is fixed by `M`.
#[derive(Debug)]
pub struct PolygonClient<M: ExecutionMode> {
    pub(crate) session: Session<M>,
}

impl PolygonClient<Blocking> {
    pub fn builder() -> PolygonClientBuilder {
        PolygonClientBuilder::default()
    }
}

impl<M: ExecutionMode> PolygonClient<M> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn crypto(&self) -> Crypto<'_, M> {
        Crypto {
            session: &self.session,
        }
    }

    pub fn forex(&self) -> Forex<'_, M> {
        Forex {
            session: &self.session,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session<M> {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    /// Release the HTTP transport. Idempotent; later calls fail with `InvalidState`.
    pub fn close(&mut self) {
        self.session.close();
    }
}

impl PolygonClient<Blocking> {
    /// Fetch an absolute `next_url` returned by a paginated endpoint.
    pub fn next_page<R: FromRawResponse>(&self, url: &str) -> SdkResult<R> {
        R::from_raw(self.session.fetch_by_absolute_url(url)?)
    }
}

impl PolygonClient<NonBlocking> {
    /// Fetch an absolute `next_url` returned by a paginated endpoint.
    pub async fn next_page<R: FromRawResponse>(&self, url: &str) -> SdkResult<R> {
        R::from_raw(self.session.fetch_by_absolute_url(url).await?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PolygonClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeouts: Timeouts,
}

impl Default for PolygonClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeouts: Timeouts::default(),
        }
    }
}

impl PolygonClientBuilder {
    /// Start from `POLYGON_API_KEY` and, if set, `POLYGON_BASE_URL`.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(key) = std::env::var(crate::network::API_KEY_ENV) {
            builder.api_key = Some(key);
        }
        if let Ok(url) = std::env::var(crate::network::BASE_URL_ENV) {
            builder.base_url = url;
        }
        builder
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connect = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.read = timeout;
        self
    }

    /// Build a blocking client over `reqwest::blocking`.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> SdkResult<BlockingClient> {
        Ok(PolygonClient {
            session: Session::<Blocking>::open(self.config()?)?,
        })
    }

    /// Build an async client over `reqwest`.
    #[cfg(feature = "http")]
    pub fn build_async(self) -> SdkResult<AsyncClient> {
        Ok(PolygonClient {
            session: Session::<NonBlocking>::open(self.config()?)?,
        })
    }

    /// Build a blocking client over a caller-supplied transport.
    pub fn build_blocking_with<T: BlockingTransport + 'static>(
        self,
        transport: T,
    ) -> SdkResult<BlockingClient> {
        Ok(PolygonClient {
            session: Session::<Blocking>::with_transport(self.config()?, transport),
        })
    }

    /// Build an async client over a caller-supplied transport.
    pub fn build_async_with<T: AsyncTransport + 'static>(
        self,
        transport: T,
    ) -> SdkResult<AsyncClient> {
        Ok(PolygonClient {
            session: Session::<NonBlocking>::with_transport(self.config()?, transport),
        })
    }

    fn config(self) -> SdkResult<SessionConfig> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                SdkError::Config(format!(
                    "missing API key (call .api_key() or set {})",
                    crate::network::API_KEY_ENV
                ))
            })?;
        Ok(SessionConfig {
            api_key,
            base_url: self.base_url,
            timeouts: self.timeouts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "blocking")]
    #[test]
    fn test_builder_requires_api_key() {
        let err = PolygonClient::builder().build_blocking().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
        let err = PolygonClient::builder().api_key("  ").build_blocking().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[cfg(feature = "blocking")]
    #[test]
    fn test_build_blocking_does_no_io() {
        let client = PolygonClient::builder()
            .api_key("k")
            .base_url("http://127.0.0.1:9")
            .connect_timeout(Duration::from_millis(50))
            .read_timeout(Duration::from_millis(50))
            .build_blocking()
            .unwrap();
        assert_eq!(client.mode(), Mode::Blocking);
        assert_eq!(client.session().base_url(), "http://127.0.0.1:9");
        assert_eq!(client.session().timeouts().connect, Duration::from_millis(50));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_build_async_does_no_io() {
        let mut client = PolygonClient::builder()
            .api_key("k")
            .build_async()
            .unwrap();
        assert_eq!(client.mode(), Mode::NonBlocking);
        assert_eq!(client.session().base_url(), crate::network::DEFAULT_API_URL);
        client.close();
        assert!(client.is_closed());
    }
}
