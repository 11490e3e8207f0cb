//! Request construction — pure transforms from typed arguments to a
//! `(path, query)` pair.
//!
//! Nothing in this module performs I/O. Malformed but type-correct values
//! (a date string like `"yesterday"`) pass through untouched and surface as
//! the remote API's error.

pub mod date;
pub mod params;
pub mod symbol;

pub use date::DateLike;
pub use params::{flag, Choice, ParamChoice, Tickers};
pub use symbol::SymbolRule;

use std::fmt;

// ─── QueryValue ──────────────────────────────────────────────────────────────

/// A single query-string value.
///
/// `Null` entries stay in the [`EndpointRequest`] but are dropped from the
/// wire query string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Null,
}

impl QueryValue {
    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }

    /// The value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Wire representation, or `None` for `Null`.
    pub fn render(&self) -> Option<String> {
        match self {
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(i) => Some(i.to_string()),
            QueryValue::Float(f) => Some(f.to_string()),
            QueryValue::Null => None,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "null"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        QueryValue::Int(i)
    }
}

impl From<u32> for QueryValue {
    fn from(i: u32) -> Self {
        QueryValue::Int(i64::from(i))
    }
}

impl From<u64> for QueryValue {
    fn from(i: u64) -> Self {
        i64::try_from(i)
            .map(QueryValue::Int)
            .unwrap_or_else(|_| QueryValue::Str(i.to_string()))
    }
}

impl From<f64> for QueryValue {
    fn from(f: f64) -> Self {
        QueryValue::Float(f)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(QueryValue::Null)
    }
}

// ─── EndpointRequest ─────────────────────────────────────────────────────────

/// A single GET request relative to the session's base URL.
///
/// Built fresh for every call and consumed by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRequest {
    pub path: String,
    pub query: Vec<(&'static str, QueryValue)>,
}

impl EndpointRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter, keeping insertion order.
    pub fn param(mut self, key: &'static str, value: impl Into<QueryValue>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Look up a query parameter by key.
    pub fn query_value(&self, key: &str) -> Option<&QueryValue> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Query pairs as sent on the wire. `Null` values are skipped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter_map(|(k, v)| v.render().map(|s| (k.to_string(), s)))
            .collect()
    }

    /// URL-encoded query string (without the leading `?`).
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(self.query_pairs()).unwrap_or_default()
    }
}
