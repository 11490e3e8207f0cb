//! Market domains organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — the market's [`MarketConfig`] and its pure request builders
//! - `client.rs` — the sub-client facade, in blocking and async form
//!
//! The endpoints both markets share are templated here once and parameterized
//! by [`MarketConfig`].

pub mod crypto;
pub mod forex;

use crate::error::SdkResult;
use crate::request::{flag, Choice, DateLike, EndpointRequest, QueryValue, SymbolRule, Tickers};
use crate::shared::{SnapshotDirection, SortOrder, Timespan};

/// Per-market path names and symbol normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketConfig {
    /// Segment under `/v1/historic/`.
    pub historic: &'static str,
    /// Segment under `/v2/aggs/grouped/locale/global/market/`.
    pub grouped: &'static str,
    /// Segment under `/v2/snapshot/locale/global/markets/`.
    pub snapshot: &'static str,
    /// Normalization for ticker path segments.
    pub symbols: SymbolRule,
}

// ─── Parameters ──────────────────────────────────────────────────────────────

/// Paging for historic tick endpoints.
///
/// These endpoints return no `next_url`; the caller pages by passing the
/// timestamp of the last result as the next `offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricTicksParams {
    pub offset: Option<QueryValue>,
    pub limit: u32,
}

impl Default for HistoricTicksParams {
    fn default() -> Self {
        Self {
            offset: None,
            limit: 500,
        }
    }
}

impl HistoricTicksParams {
    pub fn offset(mut self, offset: impl Into<QueryValue>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Max 10000.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Window and ordering for aggregate bars.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateBarsParams {
    pub multiplier: u32,
    pub timespan: Choice<Timespan>,
    pub adjusted: bool,
    pub sort: Choice<SortOrder>,
    pub limit: u32,
}

impl Default for AggregateBarsParams {
    fn default() -> Self {
        Self {
            multiplier: 1,
            timespan: Choice::default(),
            adjusted: true,
            sort: Choice::default(),
            limit: 5000,
        }
    }
}

impl AggregateBarsParams {
    pub fn multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn timespan(mut self, timespan: impl Into<Choice<Timespan>>) -> Self {
        self.timespan = timespan.into();
        self
    }

    pub fn adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    pub fn sort(mut self, sort: impl Into<Choice<SortOrder>>) -> Self {
        self.sort = sort.into();
        self
    }

    /// Max 50000.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

// ─── Shared endpoint templates ───────────────────────────────────────────────

pub(crate) fn historic_ticks(
    market: &MarketConfig,
    from: &str,
    to: &str,
    date: DateLike,
    params: &HistoricTicksParams,
) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v1/historic/{}/{}/{}/{}",
        market.historic,
        from.to_uppercase(),
        to.to_uppercase(),
        date.render()
    ))
    .param("offset", params.offset.clone())
    .param("limit", params.limit)
}

pub(crate) fn aggregate_bars(
    market: &MarketConfig,
    symbol: &str,
    from_date: DateLike,
    to_date: DateLike,
    params: &AggregateBarsParams,
) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
        market.symbols.apply(symbol),
        params.multiplier,
        params.timespan.resolve(),
        from_date.render(),
        to_date.render()
    ))
    .param("adjusted", flag(params.adjusted))
    .param("sort", params.sort.resolve())
    .param("limit", params.limit)
}

pub(crate) fn grouped_daily_bars(
    market: &MarketConfig,
    date: DateLike,
    adjusted: bool,
) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v2/aggs/grouped/locale/global/market/{}/{}",
        market.grouped,
        date.render()
    ))
    .param("adjusted", flag(adjusted))
}

pub(crate) fn previous_close(market: &MarketConfig, symbol: &str, adjusted: bool) -> EndpointRequest {
    EndpointRequest::new(format!("/v2/aggs/ticker/{}/prev", market.symbols.apply(symbol)))
        .param("adjusted", flag(adjusted))
}

pub(crate) fn snapshot_all(market: &MarketConfig, symbols: Tickers) -> SdkResult<EndpointRequest> {
    let tickers = symbols.render()?;
    Ok(EndpointRequest::new(format!(
        "/v2/snapshot/locale/global/markets/{}/tickers",
        market.snapshot
    ))
    .param("tickers", tickers))
}

pub(crate) fn snapshot(market: &MarketConfig, symbol: &str) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v2/snapshot/locale/global/markets/{}/tickers/{}",
        market.snapshot,
        market.symbols.apply(symbol)
    ))
}

pub(crate) fn gainers_and_losers(
    market: &MarketConfig,
    direction: Choice<SnapshotDirection>,
) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v2/snapshot/locale/global/markets/{}/{}",
        market.snapshot,
        direction.resolve()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MARKET: MarketConfig = MarketConfig {
        historic: "h",
        grouped: "g",
        snapshot: "s",
        symbols: SymbolRule::Upper,
    };

    #[test]
    fn test_aggregate_defaults() {
        let p = AggregateBarsParams::default();
        assert_eq!(p.multiplier, 1);
        assert_eq!(p.timespan.resolve(), "day");
        assert!(p.adjusted);
        assert_eq!(p.sort.resolve(), "asc");
        assert_eq!(p.limit, 5000);
    }

    #[test]
    fn test_historic_without_offset_sends_only_limit() {
        let req = historic_ticks(
            &TEST_MARKET,
            "btc",
            "usd",
            "2021-01-01".into(),
            &HistoricTicksParams::default(),
        );
        assert_eq!(req.path, "/v1/historic/h/BTC/USD/2021-01-01");
        assert!(req.query_value("offset").unwrap().is_null());
        assert_eq!(req.query_string(), "limit=500");
    }

    #[test]
    fn test_historic_with_offset() {
        let params = HistoricTicksParams::default().offset(1_610_000_000_000u64).limit(100);
        let req = historic_ticks(&TEST_MARKET, "btc", "usd", "2021-01-01".into(), &params);
        assert_eq!(req.query_string(), "offset=1610000000000&limit=100");
    }

    #[test]
    fn test_raw_string_choices_pass_through() {
        let params = AggregateBarsParams::default().timespan("fortnight").sort("DESC");
        let req = aggregate_bars(&TEST_MARKET, "x:ethusd", "a".into(), "b".into(), &params);
        assert_eq!(req.path, "/v2/aggs/ticker/X:ETHUSD/range/1/fortnight/a/b");
        assert_eq!(req.query_value("sort").and_then(|v| v.as_str()), Some("DESC"));
    }

    #[test]
    fn test_gainers_and_losers_path() {
        let req = gainers_and_losers(&TEST_MARKET, SnapshotDirection::Losers.into());
        assert_eq!(req.path, "/v2/snapshot/locale/global/markets/s/losers");
        assert!(req.query.is_empty());
    }
}
