//! Forex domain — request builders for the currency endpoints.
//!
//! Forex tickers carry the `C:` market prefix (`C:EURUSD`); it is added to
//! ticker path segments when missing. Plain currency codes (`EUR`, `USD`) in
//! the pair-style endpoints are only upper-cased.

pub mod client;

use super::{AggregateBarsParams, HistoricTicksParams, MarketConfig};
use crate::error::SdkResult;
use crate::request::symbol::{self, FOREX_PREFIX};
use crate::request::{Choice, DateLike, EndpointRequest, SymbolRule, Tickers};
use crate::shared::SnapshotDirection;

pub const FOREX: MarketConfig = MarketConfig {
    historic: "forex",
    grouped: "fx",
    snapshot: "forex",
    symbols: SymbolRule::Prefixed(FOREX_PREFIX),
};

/// `/v1/historic/forex/{FROM}/{TO}/{date}`
pub fn historic_ticks(
    from_symbol: &str,
    to_symbol: &str,
    date: impl Into<DateLike>,
    params: &HistoricTicksParams,
) -> EndpointRequest {
    super::historic_ticks(&FOREX, from_symbol, to_symbol, date.into(), params)
}

/// `/v1/last_quote/currencies/{FROM}/{TO}`
pub fn last_quote(from_symbol: &str, to_symbol: &str) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v1/last_quote/currencies/{}/{}",
        symbol::code(from_symbol),
        symbol::code(to_symbol)
    ))
}

/// `/v2/aggs/ticker/{C:SYMBOL}/range/{multiplier}/{timespan}/{from}/{to}`
pub fn aggregate_bars(
    symbol: &str,
    from_date: impl Into<DateLike>,
    to_date: impl Into<DateLike>,
    params: &AggregateBarsParams,
) -> EndpointRequest {
    super::aggregate_bars(&FOREX, symbol, from_date.into(), to_date.into(), params)
}

/// `/v2/aggs/grouped/locale/global/market/fx/{date}`
pub fn grouped_daily_bars(date: impl Into<DateLike>, adjusted: bool) -> EndpointRequest {
    super::grouped_daily_bars(&FOREX, date.into(), adjusted)
}

/// `/v2/aggs/ticker/{C:SYMBOL}/prev`
pub fn previous_close(symbol: &str, adjusted: bool) -> EndpointRequest {
    super::previous_close(&FOREX, symbol, adjusted)
}

/// `/v2/snapshot/locale/global/markets/forex/tickers?tickers=...`
pub fn snapshot_all(symbols: impl Into<Tickers>) -> SdkResult<EndpointRequest> {
    super::snapshot_all(&FOREX, symbols.into())
}

/// `/v2/snapshot/locale/global/markets/forex/tickers/{C:SYMBOL}`
pub fn snapshot(symbol: &str) -> EndpointRequest {
    super::snapshot(&FOREX, symbol)
}

/// `/v2/snapshot/locale/global/markets/forex/{direction}`
pub fn gainers_and_losers(direction: impl Into<Choice<SnapshotDirection>>) -> EndpointRequest {
    super::gainers_and_losers(&FOREX, direction.into())
}

/// `/v1/conversion/{FROM}/{TO}?amount=..&precision=..`
///
/// `precision` defaults to 2 decimal places.
pub fn currency_conversion(
    from_symbol: &str,
    to_symbol: &str,
    amount: f64,
    precision: Option<u32>,
) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v1/conversion/{}/{}",
        symbol::code(from_symbol),
        symbol::code(to_symbol)
    ))
    .param("amount", amount)
    .param("precision", precision.unwrap_or(2))
}
