//! Shared parameter enums used across both market domains.
//!
//! Each enum serializes to the same token the API expects in a path segment,
//! and converts into a [`Choice`] so facade methods accept either the enum or a
//! raw string.

use crate::request::{Choice, ParamChoice};
use serde::{Deserialize, Serialize};

// ─── Timespan ────────────────────────────────────────────────────────────────

/// Size of the time window for aggregate bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
    Minute,
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timespan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl ParamChoice for Timespan {
    fn as_str(&self) -> &'static str {
        Timespan::as_str(self)
    }
}

impl From<Timespan> for Choice<Timespan> {
    fn from(t: Timespan) -> Self {
        Choice::Known(t)
    }
}

impl std::fmt::Display for Timespan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── SortOrder ───────────────────────────────────────────────────────────────

/// Result ordering by timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl ParamChoice for SortOrder {
    fn as_str(&self) -> &'static str {
        SortOrder::as_str(self)
    }
}

impl From<SortOrder> for Choice<SortOrder> {
    fn from(s: SortOrder) -> Self {
        Choice::Known(s)
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── SnapshotDirection ───────────────────────────────────────────────────────

/// Top movers of the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotDirection {
    #[default]
    Gainers,
    Losers,
}

impl SnapshotDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Losers => "losers",
        }
    }
}

impl ParamChoice for SnapshotDirection {
    fn as_str(&self) -> &'static str {
        SnapshotDirection::as_str(self)
    }
}

impl From<SnapshotDirection> for Choice<SnapshotDirection> {
    fn from(d: SnapshotDirection) -> Self {
        Choice::Known(d)
    }
}

impl std::fmt::Display for SnapshotDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
