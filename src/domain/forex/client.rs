//! Forex sub-client — one method per forex endpoint, blocking and async.

use crate::domain::forex;
use crate::domain::{AggregateBarsParams, HistoricTicksParams};
use crate::error::SdkResult;
use crate::http::{Blocking, ExecutionMode, FromRawResponse, NonBlocking, Session};
use crate::request::{Choice, DateLike, Tickers};
use crate::shared::SnapshotDirection;

/// Sub-client for forex operations.
pub struct Forex<'a, M: ExecutionMode> {
    pub(crate) session: &'a Session<M>,
}

impl<'a> Forex<'a, Blocking> {
    pub fn get_historic_forex_ticks<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        date: impl Into<DateLike>,
        params: &HistoricTicksParams,
    ) -> SdkResult<R> {
        self.session
            .call(forex::historic_ticks(from_symbol, to_symbol, date, params))
    }

    pub fn get_last_quote<R: FromRawResponse>(&self, from_symbol: &str, to_symbol: &str) -> SdkResult<R> {
        self.session.call(forex::last_quote(from_symbol, to_symbol))
    }

    pub fn get_aggregate_bars<R: FromRawResponse>(
        &self,
        symbol: &str,
        from_date: impl Into<DateLike>,
        to_date: impl Into<DateLike>,
        params: &AggregateBarsParams,
    ) -> SdkResult<R> {
        self.session
            .call(forex::aggregate_bars(symbol, from_date, to_date, params))
    }

    pub fn get_grouped_daily_bars<R: FromRawResponse>(
        &self,
        date: impl Into<DateLike>,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session.call(forex::grouped_daily_bars(date, adjusted))
    }

    pub fn get_previous_close<R: FromRawResponse>(&self, symbol: &str, adjusted: bool) -> SdkResult<R> {
        self.session.call(forex::previous_close(symbol, adjusted))
    }

    /// Fails with `InvalidArgument` before any request if `symbols` is not a list.
    pub fn get_snapshot_all<R: FromRawResponse>(&self, symbols: impl Into<Tickers>) -> SdkResult<R> {
        self.session.call(forex::snapshot_all(symbols)?)
    }

    pub fn get_snapshot<R: FromRawResponse>(&self, symbol: &str) -> SdkResult<R> {
        self.session.call(forex::snapshot(symbol))
    }

    pub fn get_gainers_and_losers<R: FromRawResponse>(
        &self,
        direction: impl Into<Choice<SnapshotDirection>>,
    ) -> SdkResult<R> {
        self.session.call(forex::gainers_and_losers(direction))
    }

    /// Convert `amount` at the latest market rate. Works in both directions.
    pub fn real_time_currency_conversion<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        amount: f64,
        precision: Option<u32>,
    ) -> SdkResult<R> {
        self.session
            .call(forex::currency_conversion(from_symbol, to_symbol, amount, precision))
    }

    /// Follow a `next_url` pointer from a previous response.
    pub fn get_next_page_by_url<R: FromRawResponse>(&self, url: &str) -> SdkResult<R> {
        R::from_raw(self.session.fetch_by_absolute_url(url)?)
    }
}

impl<'a> Forex<'a, NonBlocking> {
    pub async fn get_historic_forex_ticks<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        date: impl Into<DateLike>,
        params: &HistoricTicksParams,
    ) -> SdkResult<R> {
        self.session
            .call(forex::historic_ticks(from_symbol, to_symbol, date, params))
            .await
    }

    pub async fn get_last_quote<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
    ) -> SdkResult<R> {
        self.session
            .call(forex::last_quote(from_symbol, to_symbol))
            .await
    }

    pub async fn get_aggregate_bars<R: FromRawResponse>(
        &self,
        symbol: &str,
        from_date: impl Into<DateLike>,
        to_date: impl Into<DateLike>,
        params: &AggregateBarsParams,
    ) -> SdkResult<R> {
        self.session
            .call(forex::aggregate_bars(symbol, from_date, to_date, params))
            .await
    }

    pub async fn get_grouped_daily_bars<R: FromRawResponse>(
        &self,
        date: impl Into<DateLike>,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session
            .call(forex::grouped_daily_bars(date, adjusted))
            .await
    }

    pub async fn get_previous_close<R: FromRawResponse>(
        &self,
        symbol: &str,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session
            .call(forex::previous_close(symbol, adjusted))
            .await
    }

    /// Fails with `InvalidArgument` before any request if `symbols` is not a list.
    pub async fn get_snapshot_all<R: FromRawResponse>(
        &self,
        symbols: impl Into<Tickers>,
    ) -> SdkResult<R> {
        let request = forex::snapshot_all(symbols)?;
        self.session.call(request).await
    }

    pub async fn get_snapshot<R: FromRawResponse>(&self, symbol: &str) -> SdkResult<R> {
        self.session.call(forex::snapshot(symbol)).await
    }

    pub async fn get_gainers_and_losers<R: FromRawResponse>(
        &self,
        direction: impl Into<Choice<SnapshotDirection>>,
    ) -> SdkResult<R> {
        self.session
            .call(forex::gainers_and_losers(direction))
            .await
    }

    /// Convert `amount` at the latest market rate. Works in both directions.
    pub async fn real_time_currency_conversion<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        amount: f64,
        precision: Option<u32>,
    ) -> SdkResult<R> {
        self.session
            .call(forex::currency_conversion(from_symbol, to_symbol, amount, precision))
            .await
    }

    /// Follow a `next_url` pointer from a previous response.
    pub async fn get_next_page_by_url<R: FromRawResponse>(&self, url: &str) -> SdkResult<R> {
        R::from_raw(self.session.fetch_by_absolute_url(url).await?)
    }
}
