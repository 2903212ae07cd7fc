//! Example: REST API market data and account queries
//!
//! Fetches public market data and, if credentials are set, account balances
//! and active orders.
//!
//! Run with: cargo run -p bitasset-rest --example market_data
//!
//! NOTE: For private endpoints, set BITASSET_ACCESS_KEY and
//! BITASSET_SECRET_KEY environment variables.

use bitasset_rest::{BitAssetRestClient, Credentials, RestError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== BitAsset REST API Example ===\n");

    let client = BitAssetRestClient::new()?;

    println!("--- Public Market Data ---\n");

    let time = client.get_server_time().await?;
    println!("Server time: {} ms", time.as_millis());

    match client.get_order_book("BTC-USDT").await {
        Ok(book) => {
            println!("BTC-USDT bids: {}", book["bids"]);
            println!("BTC-USDT asks: {}", book["asks"]);
        }
        Err(RestError::NotFound { name, .. }) => println!("Pair {} is not listed", name),
        Err(e) => println!("Error: {}", e),
    }
    println!();

    let creds = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => {
            println!("Skipping private endpoints: {}", e);
            return Ok(());
        }
    };

    println!("--- Private Account Data ---\n");

    let client = BitAssetRestClient::with_credentials(creds)?;
    let market_id = client.get_market_id("BTC-USDT").await?;

    println!("Balances: {}", client.get_balances().await?);
    println!(
        "Active BTC-USDT orders: {}",
        client.get_active_orders(Some(market_id)).await?
    );

    Ok(())
}
