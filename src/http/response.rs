//! Raw responses and the decode policy applied by the facades.

use crate::error::SdkError;
use serde::de::DeserializeOwned;

/// The undecoded response: status, headers and the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as UTF-8 text, lossy.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON into any deserializable type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn a non-2xx response into `SdkError::Remote`.
    pub fn error_for_status(self) -> Result<Self, SdkError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SdkError::Remote {
                status: self.status,
                body: self.text(),
            })
        }
    }
}

/// What a facade call hands back: the raw response or its JSON decoding.
///
/// The caller picks by annotating the result type:
///
/// ```rust,ignore
/// let bars: serde_json::Value = client.crypto().get_previous_close("X:BTCUSD", true)?;
/// let raw: RawResponse = client.crypto().get_previous_close("X:BTCUSD", true)?;
/// ```
pub trait FromRawResponse: Sized {
    fn from_raw(raw: RawResponse) -> Result<Self, SdkError>;
}

impl FromRawResponse for RawResponse {
    fn from_raw(raw: RawResponse) -> Result<Self, SdkError> {
        Ok(raw)
    }
}

impl FromRawResponse for serde_json::Value {
    fn from_raw(raw: RawResponse) -> Result<Self, SdkError> {
        raw.json()
    }
}

/// The `next_url` pagination pointer of a decoded page, if any.
pub fn next_url(page: &serde_json::Value) -> Option<&str> {
    page.get("next_url").and_then(|v| v.as_str())
}
