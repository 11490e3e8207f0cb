//! Blocking crypto queries.
//!
//! ```bash
//! POLYGON_API_KEY=... cargo run --example crypto_blocking
//! ```

use polygon_sdk::prelude::*;
use serde_json::Value;

fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();

    let mut client = PolygonClientBuilder::from_env().build_blocking()?;
    let crypto = client.crypto();

    let prev: Value = crypto.get_previous_close("X:BTCUSD", true)?;
    println!("previous close: {}", prev["results"]);

    let params = AggregateBarsParams::default()
        .multiplier(1)
        .timespan(Timespan::Hour)
        .limit(24);
    let bars: Value = crypto.get_aggregate_bars("X:BTCUSD", "2024-01-02", "2024-01-02", &params)?;
    println!("hourly bars: {}", bars["resultsCount"]);

    let raw: RawResponse = crypto.get_snapshot_all(["X:BTCUSD", "x:ethusd"])?;
    println!("snapshot status {} ({} bytes)", raw.status, raw.body.len());

    let book: Value = crypto.get_level2_book("X:BTCUSD")?;
    println!("book: {}", book["data"]["ticker"]);

    client.close();
    Ok(())
}
