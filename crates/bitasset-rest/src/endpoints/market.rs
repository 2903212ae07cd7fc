//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use super::decode;
use crate::client::BitAssetRestClient;
use crate::error::{LookupKind, RestError, RestResult};
use crate::request::ApiRequest;
use crate::types::{CurrencyId, CurrencyInfo, MarketId, MarketSymbol, ServerTime};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BitAssetRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BitAssetRestClient) -> Self {
        Self { client }
    }

    /// List all trading pairs
    #[instrument(skip(self))]
    pub async fn list_markets(&self) -> RestResult<Value> {
        self.client.dispatch(ApiRequest::public_get("symbols")).await
    }

    /// Resolve a trading pair such as `btc-usdt` to its contract id
    ///
    /// Names are compared after uppercasing `pair`; only the matching entry
    /// has to decode. Returns [`RestError::NotFound`] if no market matches.
    #[instrument(skip(self))]
    pub async fn get_market_id(&self, pair: &str) -> RestResult<MarketId> {
        let markets = self.list_markets().await?;
        let market: MarketSymbol = find_named(markets, pair, LookupKind::Market)?;

        debug!(id = market.id, "Resolved trading pair");
        Ok(market.id)
    }

    /// List all currencies
    #[instrument(skip(self))]
    pub async fn list_currencies(&self) -> RestResult<Value> {
        self.client.dispatch(ApiRequest::public_get("currencies")).await
    }

    /// Resolve a currency code such as `usdt` to its id
    #[instrument(skip(self))]
    pub async fn get_currency_id(&self, currency: &str) -> RestResult<CurrencyId> {
        let currencies = self.list_currencies().await?;
        let coin: CurrencyInfo = find_named(currencies, currency, LookupKind::Currency)?;
        Ok(coin.id)
    }

    /// Get server time (milliseconds)
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        let value = self.client.dispatch(ApiRequest::public_get("server-time")).await?;
        decode(value)
    }

    /// Get orderbook depth for a trading pair
    ///
    /// The pair is resolved through `symbols` first; an unknown pair fails
    /// with [`RestError::NotFound`] before the depth request is sent.
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, pair: &str) -> RestResult<Value> {
        let contract_id = self.get_market_id(pair).await?;
        self.get_order_book_by_id(contract_id).await
    }

    /// Get orderbook depth for a known contract id
    #[instrument(skip(self))]
    pub async fn get_order_book_by_id(&self, contract_id: MarketId) -> RestResult<Value> {
        let request = ApiRequest::public_get("query-depth").query("contractId", contract_id);
        self.client.dispatch(request).await
    }
}

/// Find the first entry whose `name` equals `name` uppercased
///
/// Only the matching entry is decoded; other entries may have any shape.
fn find_named<T: DeserializeOwned>(list: Value, name: &str, kind: LookupKind) -> RestResult<T> {
    let name = name.to_uppercase();

    let Value::Array(entries) = list else {
        return Err(RestError::Decode(format!("expected a {} list", kind)));
    };

    let entry = entries
        .into_iter()
        .find(|entry| entry.get("name").and_then(Value::as_str) == Some(name.as_str()))
        .ok_or(RestError::NotFound { kind, name })?;

    decode(entry)
}
