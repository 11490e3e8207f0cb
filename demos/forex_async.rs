//! Async forex queries, several in flight at once.
//!
//! ```bash
//! POLYGON_API_KEY=... cargo run --example forex_async
//! ```

use polygon_sdk::prelude::*;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();

    let mut client = PolygonClientBuilder::from_env().build_async()?;
    let forex = client.forex();

    let (snapshot, quote, conversion) = tokio::join!(
        forex.get_snapshot::<Value>("EURUSD"),
        forex.get_last_quote::<Value>("EUR", "USD"),
        forex.real_time_currency_conversion::<Value>("USD", "CAD", 100.0, None),
    );
    println!("snapshot: {}", snapshot?["ticker"]);
    println!("last quote: {}", quote?["last"]);
    println!("100 USD in CAD: {}", conversion?["converted"]);

    let mut page: Value = forex.get_snapshot_all(["C:EURUSD", "C:GBPUSD"]).await?;
    while let Some(url) = next_url(&page).map(str::to_string) {
        page = client.next_page(&url).await?;
    }

    client.close();
    Ok(())
}
