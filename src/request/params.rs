//! Query parameter rendering: boolean flags, symbol lists, enum-or-string choices.

use crate::error::SdkError;

/// Boolean query flag. The API's query parser expects string tokens.
pub fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ─── Choice ──────────────────────────────────────────────────────────────────

/// An enum with a fixed wire string per variant.
pub trait ParamChoice {
    fn as_str(&self) -> &'static str;
}

/// A parameter given either as a known variant or as a raw string.
///
/// ```rust,ignore
/// let span: Choice<Timespan> = Timespan::Minute.into();
/// let span: Choice<Timespan> = "minute".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Known(T),
    Raw(String),
}

impl<T: ParamChoice> Choice<T> {
    /// The wire string: the variant's value, or the raw string unchanged.
    pub fn resolve(&self) -> String {
        match self {
            Choice::Known(t) => t.as_str().to_string(),
            Choice::Raw(s) => s.clone(),
        }
    }
}

impl<T: ParamChoice + Default> Default for Choice<T> {
    fn default() -> Self {
        Choice::Known(T::default())
    }
}

impl<T> From<&str> for Choice<T> {
    fn from(s: &str) -> Self {
        Choice::Raw(s.to_string())
    }
}

impl<T> From<String> for Choice<T> {
    fn from(s: String) -> Self {
        Choice::Raw(s)
    }
}

// ─── Tickers ─────────────────────────────────────────────────────────────────

/// A list-valued symbol parameter.
///
/// Build it from a `Vec`, slice or array of symbols. A single bare string
/// converts to [`Tickers::Scalar`] and is rejected by [`Tickers::render`]
/// with `InvalidArgument`; wrap a lone symbol in a slice instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tickers {
    List(Vec<String>),
    Scalar(String),
}

impl Tickers {
    /// Comma-joined, upper-cased, in input order.
    pub fn render(&self) -> Result<String, SdkError> {
        match self {
            Tickers::List(symbols) => Ok(symbols
                .iter()
                .map(|s| s.to_uppercase())
                .collect::<Vec<_>>()
                .join(",")),
            Tickers::Scalar(s) => Err(SdkError::InvalidArgument(format!(
                "symbols must be supplied as a list of tickers, got a single value {:?}",
                s
            ))),
        }
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Tickers {
    fn from(v: Vec<S>) -> Self {
        Tickers::List(v.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&Vec<S>> for Tickers {
    fn from(v: &Vec<S>) -> Self {
        Tickers::List(v.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Tickers {
    fn from(v: &[S]) -> Self {
        Tickers::List(v.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Tickers {
    fn from(v: [S; N]) -> Self {
        Tickers::List(v.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl From<&str> for Tickers {
    fn from(s: &str) -> Self {
        Tickers::Scalar(s.to_string())
    }
}

impl From<String> for Tickers {
    fn from(s: String) -> Self {
        Tickers::Scalar(s)
    }
}
