//! Crypto sub-client — one method per crypto endpoint, blocking and async.
//!
//! Both forms build their requests through the same functions in
//! [`crate::domain::crypto`]; only the session call differs.

use crate::domain::crypto;
use crate::domain::{AggregateBarsParams, HistoricTicksParams};
use crate::error::SdkResult;
use crate::http::{Blocking, ExecutionMode, FromRawResponse, NonBlocking, Session};
use crate::request::{Choice, DateLike, Tickers};
use crate::shared::SnapshotDirection;

/// Sub-client for crypto operations.
pub struct Crypto<'a, M: ExecutionMode> {
    pub(crate) session: &'a Session<M>,
}

impl<'a> Crypto<'a, Blocking> {
    pub fn get_historic_trades<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        date: impl Into<DateLike>,
        params: &HistoricTicksParams,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::historic_trades(from_symbol, to_symbol, date, params))
    }

    pub fn get_last_trade<R: FromRawResponse>(&self, from_symbol: &str, to_symbol: &str) -> SdkResult<R> {
        self.session.call(crypto::last_trade(from_symbol, to_symbol))
    }

    pub fn get_daily_open_close<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        date: impl Into<DateLike>,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::daily_open_close(from_symbol, to_symbol, date, adjusted))
    }

    pub fn get_aggregate_bars<R: FromRawResponse>(
        &self,
        symbol: &str,
        from_date: impl Into<DateLike>,
        to_date: impl Into<DateLike>,
        params: &AggregateBarsParams,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::aggregate_bars(symbol, from_date, to_date, params))
    }

    pub fn get_grouped_daily_bars<R: FromRawResponse>(
        &self,
        date: impl Into<DateLike>,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session.call(crypto::grouped_daily_bars(date, adjusted))
    }

    pub fn get_previous_close<R: FromRawResponse>(&self, symbol: &str, adjusted: bool) -> SdkResult<R> {
        self.session.call(crypto::previous_close(symbol, adjusted))
    }

    /// Fails with `InvalidArgument` before any request if `symbols` is not a list.
    pub fn get_snapshot_all<R: FromRawResponse>(&self, symbols: impl Into<Tickers>) -> SdkResult<R> {
        self.session.call(crypto::snapshot_all(symbols)?)
    }

    pub fn get_snapshot<R: FromRawResponse>(&self, symbol: &str) -> SdkResult<R> {
        self.session.call(crypto::snapshot(symbol))
    }

    pub fn get_gainers_and_losers<R: FromRawResponse>(
        &self,
        direction: impl Into<Choice<SnapshotDirection>>,
    ) -> SdkResult<R> {
        self.session.call(crypto::gainers_and_losers(direction))
    }

    pub fn get_level2_book<R: FromRawResponse>(&self, symbol: &str) -> SdkResult<R> {
        self.session.call(crypto::level2_book(symbol))
    }

    /// Follow a `next_url` pointer from a previous response.
    pub fn get_next_page_by_url<R: FromRawResponse>(&self, url: &str) -> SdkResult<R> {
        R::from_raw(self.session.fetch_by_absolute_url(url)?)
    }
}

impl<'a> Crypto<'a, NonBlocking> {
    pub async fn get_historic_trades<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        date: impl Into<DateLike>,
        params: &HistoricTicksParams,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::historic_trades(from_symbol, to_symbol, date, params))
            .await
    }

    pub async fn get_last_trade<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::last_trade(from_symbol, to_symbol))
            .await
    }

    pub async fn get_daily_open_close<R: FromRawResponse>(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        date: impl Into<DateLike>,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::daily_open_close(from_symbol, to_symbol, date, adjusted))
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
            .call(crypto::aggregate_bars(symbol, from_date, to_date, params))
            .await
    }

    pub async fn get_grouped_daily_bars<R: FromRawResponse>(
        &self,
        date: impl Into<DateLike>,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::grouped_daily_bars(date, adjusted))
            .await
    }

    pub async fn get_previous_close<R: FromRawResponse>(
        &self,
        symbol: &str,
        adjusted: bool,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::previous_close(symbol, adjusted))
            .await
    }

    /// Fails with `InvalidArgument` before any request if `symbols` is not a list.
    pub async fn get_snapshot_all<R: FromRawResponse>(
        &self,
        symbols: impl Into<Tickers>,
    ) -> SdkResult<R> {
        let request = crypto::snapshot_all(symbols)?;
        self.session.call(request).await
    }

    pub async fn get_snapshot<R: FromRawResponse>(&self, symbol: &str) -> SdkResult<R> {
        self.session.call(crypto::snapshot(symbol)).await
    }

    pub async fn get_gainers_and_losers<R: FromRawResponse>(
        &self,
        direction: impl Into<Choice<SnapshotDirection>>,
    ) -> SdkResult<R> {
        self.session
            .call(crypto::gainers_and_losers(direction))
            .await
    }

    pub async fn get_level2_book<R: FromRawResponse>(&self, symbol: &str) -> SdkResult<R> {
        self.session.call(crypto::level2_book(symbol)).await
    }

    /// Follow a `next_url` pointer from a previous response.
    pub async fn get_next_page_by_url<R: FromRawResponse>(&self, url: &str) -> SdkResult<R> {
        R::from_raw(self.session.fetch_by_absolute_url(url).await?)
    }
}
