//! HTTP layer — transport contracts, raw responses and the dual-mode session.

pub mod response;
pub mod session;
pub mod transport;

pub use response::{next_url, FromRawResponse, RawResponse};
pub use session::{Blocking, ExecutionMode, Mode, NonBlocking, Session, SessionConfig};
pub use transport::{AsyncTransport, BlockingTransport, HttpRequest, Timeouts, TransportFuture};

#[cfg(feature = "http")]
pub use transport::ReqwestTransport;

#[cfg(feature = "blocking")]
pub use transport::ReqwestBlockingTransport;
