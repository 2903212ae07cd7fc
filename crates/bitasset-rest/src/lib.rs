//! REST API client for the BitAsset cryptocurrency exchange
//!
//! # Features
//!
//! - **Market Data**: Trading pairs, currencies, server time, order book depth
//! - **Account**: Balances, active orders, order details
//! - **Trading**: Place and cancel orders
//!
//! # Authentication
//!
//! Private endpoints are signed through the query string with HMAC-SHA256,
//! see [`bitasset_auth`] for the scheme.
//!
//! # Example
//!
//! ```no_run
//! use bitasset_rest::{BitAssetRestClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitAssetRestClient::new()?;
//!     let book = client.get_order_book("BTC-USDT").await?;
//!     println!("BTC-USDT bids: {}", book["bids"]);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BitAssetRestClient::with_credentials(creds)?;
//!     let balances = auth_client.get_balances().await?;
//!     println!("Balances: {}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! Responses are returned as [`serde_json::Value`] with the exchange's
//! `data` envelope already removed; decode them into your own types as
//! needed.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod types;

// Re-export main types
pub use bitasset_auth::{Credentials, QueryParams};
pub use client::{BitAssetRestClient, ClientConfig};
pub use error::{LookupKind, RestError, RestResult};
pub use request::{ApiRequest, ApiUrls, HttpMethod, Scope};

pub use types::{
    CurrencyId, CurrencyInfo, MarketId, MarketSymbol, OrderId, OrderRequest, OrderSide, OrderType,
    ServerTime,
};
