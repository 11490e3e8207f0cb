//! # Polygon SDK
//!
//! A Rust client for the Polygon.io crypto and forex REST endpoints, with a
//! blocking and an async method surface over one request-construction layer.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Request** — Pure builders: path templating, date coercion, symbol and
//!    parameter normalization (no I/O)
//! 2. **HTTP** — `Session<Blocking>` / `Session<NonBlocking>` over pluggable transports
//! 3. **Domain** — Per-market builders and sub-clients (`crypto`, `forex`)
//! 4. **High-Level Client** — `PolygonClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polygon_sdk::prelude::*;
//!
//! let client = PolygonClient::builder()
//!     .api_key("MY_API_KEY")
//!     .build_blocking()?;
//!
//! let prev: serde_json::Value = client.crypto().get_previous_close("X:BTCUSD", true)?;
//! let raw: RawResponse = client.forex().get_snapshot("EURUSD")?;
//! ```

// ── Layer 1: Request ─────────────────────────────────────────────────────────

/// Pure request builders and parameter rendering.
pub mod request;

/// Shared parameter enums.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Transports, raw responses and the dual-mode session.
pub mod http;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Market modules (vertical slices): request builders and sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PolygonClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Parameters
    pub use crate::domain::{AggregateBarsParams, HistoricTicksParams};
    pub use crate::request::{Choice, DateLike, EndpointRequest, QueryValue, Tickers};
    pub use crate::shared::{SnapshotDirection, SortOrder, Timespan};

    // Errors
    pub use crate::error::{HttpError, SdkError, SdkResult};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP
    pub use crate::http::{
        next_url, AsyncTransport, Blocking, BlockingTransport, FromRawResponse, HttpRequest, Mode,
        NonBlocking, RawResponse, Session, SessionConfig, Timeouts,
    };

    // Client + sub-clients
    pub use crate::client::{
        AsyncClient, BlockingClient, CryptoClient, ForexClient, PolygonClient,
        PolygonClientBuilder,
    };
}
