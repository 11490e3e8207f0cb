//! Crypto domain — request builders for the cryptocurrency endpoints.
//!
//! Crypto tickers (`X:BTCUSD`) are upper-cased and otherwise left alone.

pub mod client;

use super::{AggregateBarsParams, HistoricTicksParams, MarketConfig};
use crate::error::SdkResult;
use crate::request::{flag, symbol, Choice, DateLike, EndpointRequest, SymbolRule, Tickers};
use crate::shared::SnapshotDirection;

pub const CRYPTO: MarketConfig = MarketConfig {
    historic: "crypto",
    grouped: "crypto",
    snapshot: "crypto",
    symbols: SymbolRule::Upper,
};

/// `/v1/historic/crypto/{FROM}/{TO}/{date}`
pub fn historic_trades(
    from_symbol: &str,
    to_symbol: &str,
    date: impl Into<DateLike>,
    params: &HistoricTicksParams,
) -> EndpointRequest {
    super::historic_ticks(&CRYPTO, from_symbol, to_symbol, date.into(), params)
}

/// `/v1/last/crypto/{FROM}/{TO}`
pub fn last_trade(from_symbol: &str, to_symbol: &str) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v1/last/crypto/{}/{}",
        symbol::code(from_symbol),
        symbol::code(to_symbol)
    ))
}

/// `/v1/open-close/crypto/{FROM}/{TO}/{date}`
pub fn daily_open_close(
    from_symbol: &str,
    to_symbol: &str,
    date: impl Into<DateLike>,
    adjusted: bool,
) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v1/open-close/crypto/{}/{}/{}",
        symbol::code(from_symbol),
        symbol::code(to_symbol),
        date.into().render()
    ))
    .param("adjusted", flag(adjusted))
}

/// `/v2/aggs/ticker/{SYMBOL}/range/{multiplier}/{timespan}/{from}/{to}`
pub fn aggregate_bars(
    symbol: &str,
    from_date: impl Into<DateLike>,
    to_date: impl Into<DateLike>,
    params: &AggregateBarsParams,
) -> EndpointRequest {
    super::aggregate_bars(&CRYPTO, symbol, from_date.into(), to_date.into(), params)
}

/// `/v2/aggs/grouped/locale/global/market/crypto/{date}`
pub fn grouped_daily_bars(date: impl Into<DateLike>, adjusted: bool) -> EndpointRequest {
    super::grouped_daily_bars(&CRYPTO, date.into(), adjusted)
}

/// `/v2/aggs/ticker/{SYMBOL}/prev`
pub fn previous_close(symbol: &str, adjusted: bool) -> EndpointRequest {
    super::previous_close(&CRYPTO, symbol, adjusted)
}

/// `/v2/snapshot/locale/global/markets/crypto/tickers?tickers=...`
pub fn snapshot_all(symbols: impl Into<Tickers>) -> SdkResult<EndpointRequest> {
    super::snapshot_all(&CRYPTO, symbols.into())
}

/// `/v2/snapshot/locale/global/markets/crypto/tickers/{SYMBOL}`
pub fn snapshot(symbol: &str) -> EndpointRequest {
    super::snapshot(&CRYPTO, symbol)
}

/// `/v2/snapshot/locale/global/markets/crypto/{direction}`
pub fn gainers_and_losers(direction: impl Into<Choice<SnapshotDirection>>) -> EndpointRequest {
    super::gainers_and_losers(&CRYPTO, direction.into())
}

/// `/v2/snapshot/locale/global/markets/crypto/tickers/{SYMBOL}/book`
pub fn level2_book(symbol: &str) -> EndpointRequest {
    EndpointRequest::new(format!(
        "/v2/snapshot/locale/global/markets/crypto/tickers/{}/book",
        CRYPTO.symbols.apply(symbol)
    ))
}
