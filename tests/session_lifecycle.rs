//! Integration tests for session lifecycle, response policy and failure
//! propagation.

mod common;

use std::time::Duration;

use common::*;
use futures_util::future::join_all;
use polygon_sdk::prelude::*;
use serde_json::Value;

// =============================================================================
// Close semantics
// =============================================================================

mod close {
    use super::*;

    #[test]
    fn test_close_twice_releases_once() {
        let log = Log::default();
        let mut client = blocking_client(&log);
        let _: Value = client.crypto().get_snapshot("X:BTCUSD").unwrap();

        client.close();
        client.close();
        assert!(client.is_closed());
        assert_eq!(log.drops(), 1);

        drop(client);
        assert_eq!(log.drops(), 1);
    }

    #[test]
    fn test_calls_after_close_are_invalid_state() {
        let log = Log::default();
        let mut client = blocking_client(&log);
        client.close();

        let err = client.crypto().get_snapshot::<Value>("X:BTCUSD").unwrap_err();
        assert!(matches!(err, SdkError::InvalidState(_)));
        let err = client.next_page::<Value>("https://api.polygon.test/x").unwrap_err();
        assert!(matches!(err, SdkError::InvalidState(_)));
        assert_eq!(log.count(), 0);
    }

    #[test]
    fn test_scope_exit_releases_after_failure() {
        let log = Log::default();
        {
            let client = blocking_client_with(MockTransport::new(&log, Reply::Fail));
            let result = client.forex().get_last_quote::<Value>("eur", "usd");
            assert!(result.is_err());
        }
        assert_eq!(log.drops(), 1);
    }

    #[tokio::test]
    async fn test_async_close_is_idempotent() {
        let log = Log::default();
        let mut client = async_client(&log);
        let _: Value = client.forex().get_snapshot("EURUSD").await.unwrap();

        client.close();
        client.close();
        let err = client
            .forex()
            .get_snapshot::<Value>("EURUSD")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidState(_)));
        assert_eq!(log.drops(), 1);
        assert_eq!(log.count(), 1);
    }
}

// =============================================================================
// Response policy
// =============================================================================

mod response_policy {
    use super::*;

    #[test]
    fn test_raw_response_is_untouched() {
        let log = Log::default();
        let client = blocking_client_with(MockTransport::new(
            &log,
            Reply::Respond(json_response(500, "upstream exploded")),
        ));
        let raw: RawResponse = client.crypto().get_previous_close("X:BTCUSD", true).unwrap();
        assert_eq!(raw.status, 500);
        assert_eq!(raw.text(), "upstream exploded");
        assert_eq!(raw.header("Content-Type"), Some("application/json"));
        assert!(matches!(
            raw.error_for_status(),
            Err(SdkError::Remote { status: 500, .. })
        ));
    }

    #[test]
    fn test_non_json_body_fails_decoding() {
        let log = Log::default();
        let client = blocking_client_with(MockTransport::new(
            &log,
            Reply::Respond(json_response(502, "<html>Bad Gateway</html>")),
        ));
        let err = client
            .crypto()
            .get_previous_close::<Value>("X:BTCUSD", true)
            .unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
        assert_eq!(log.count(), 1);
    }

    #[test]
    fn test_json_error_body_is_not_intercepted() {
        let log = Log::default();
        let client = blocking_client_with(MockTransport::new(
            &log,
            Reply::Respond(json_response(403, r#"{"status":"NOT_AUTHORIZED"}"#)),
        ));
        let v: Value = client.forex().get_snapshot("EURUSD").unwrap();
        assert_eq!(v["status"], "NOT_AUTHORIZED");
    }
}

// =============================================================================
// Transport failures
// =============================================================================

mod failures {
    use super::*;

    #[test]
    fn test_transport_failure_propagates_without_retry() {
        let log = Log::default();
        let client = blocking_client_with(MockTransport::new(&log, Reply::Fail));
        let err = client.crypto().get_last_trade::<Value>("btc", "usd").unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Transport(_))));
        assert_eq!(log.count(), 1);
    }

    #[tokio::test]
    async fn test_timeout_propagates_without_retry() {
        let log = Log::default();
        let client = async_client_with(MockTransport::new(&log, Reply::TimeOut));
        let err = client
            .crypto()
            .get_level2_book::<RawResponse>("X:BTCUSD")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Timeout)));
        assert_eq!(log.count(), 1);
    }
}

// =============================================================================
// Pagination and concurrency
// =============================================================================

mod paging_and_concurrency {
    use super::*;

    #[test]
    fn test_next_page_hits_absolute_url() {
        let log = Log::default();
        let client = blocking_client_with(MockTransport::json(
            &log,
            r#"{"results":[],"next_url":"https://api.polygon.io/v2/snapshot?cursor=p2"}"#,
        ));
        let first: Value = client.crypto().get_snapshot_all(["X:BTCUSD"]).unwrap();
        let url = next_url(&first).unwrap().to_string();
        let _: Value = client.next_page(&url).unwrap();
        let _: Value = client.forex().get_next_page_by_url(&url).unwrap();

        let requests = log.requests();
        assert_eq!(requests[1].url, "https://api.polygon.io/v2/snapshot?cursor=p2");
        assert!(requests[1].query.is_empty());
        assert_eq!(requests[1], requests[2]);
        assert_eq!(requests[1].header("Authorization"), Some("Bearer test-key"));
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_session() {
        let log = Log::default();
        // the first request issued is the slowest to complete
        let transport = MockTransport::json(&log, "{}").with_delay(|url| {
            if url.ends_with("/prev") {
                Duration::from_millis(60)
            } else {
                Duration::ZERO
            }
        });
        let client = async_client_with(transport);

        let crypto = client.crypto();
        let forex = client.forex();
        let (a, b, c) = tokio::join!(
            crypto.get_previous_close::<Value>("X:BTCUSD", true),
            crypto.get_snapshot::<Value>("X:ETHUSD"),
            forex.get_snapshot::<Value>("EURUSD"),
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());

        let requests = log.requests();
        assert_eq!(requests.len(), 3);
        assert!(path_of(requests.last().unwrap()).ends_with("/prev"));
    }

    #[tokio::test]
    async fn test_fan_out_keeps_input_order() {
        let log = Log::default();
        let transport = MockTransport::json(&log, "{}").with_delay(|url| {
            if url.ends_with("X:BTCUSD") {
                Duration::from_millis(60)
            } else {
                Duration::ZERO
            }
        });
        let client = async_client_with(transport);

        let crypto = client.crypto();
        let tickers = ["X:BTCUSD", "X:ETHUSD", "X:SOLUSD"];
        let results: Vec<SdkResult<RawResponse>> =
            join_all(tickers.iter().map(|t| crypto.get_snapshot(*t))).await;
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(Result::is_ok));

        // BTC was issued first but completes last
        let requests = log.requests();
        assert_eq!(requests.len(), 3);
        assert!(path_of(&requests[2]).ends_with("X:BTCUSD"));
    }

    #[tokio::test]
    async fn test_async_next_page() {
        let log = Log::default();
        let client = async_client(&log);
        let _: RawResponse = client.next_page("https://api.polygon.io/v3/x?cursor=1").await.unwrap();
        let _: Value = client
            .crypto()
            .get_next_page_by_url("https://api.polygon.io/v3/x?cursor=2")
            .await
            .unwrap();
        assert_eq!(log.requests()[0].url, "https://api.polygon.io/v3/x?cursor=1");
        assert_eq!(log.requests()[1].url, "https://api.polygon.io/v3/x?cursor=2");
    }
}
