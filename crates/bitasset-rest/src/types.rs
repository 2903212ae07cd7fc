//! Request and response types for BitAsset REST API
//!
//! Most endpoints hand back their `data` payload as an opaque
//! [`serde_json::Value`]. The types here cover the places where the client
//! itself needs structure: id lookups, server time and order placement.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Numeric trading-pair identifier (`contractId`)
pub type MarketId = u64;

/// Numeric currency identifier
pub type CurrencyId = u64;

/// Exchange-assigned order identifier
pub type OrderId = u64;

// ============================================================================
// Market Data Types
// ============================================================================

/// Trading pair descriptor from `symbols`
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSymbol {
    /// Contract id used by every market-scoped endpoint
    pub id: MarketId,
    /// Pair name, e.g. `BTC-USDT`
    pub name: String,
    /// Fields not interpreted by the client
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Currency descriptor from `currencies`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyInfo {
    pub id: CurrencyId,
    /// Currency code, e.g. `BTC`
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Server time in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerTime(pub u64);

impl ServerTime {
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ServerTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(ms) => Ok(Self(ms)),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(serde::de::Error::custom),
        }
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side, sent as `1` (buy) or `-1` (sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum OrderSide {
    /// Buy order
    Buy = 1,
    /// Sell order
    Sell = -1,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type, sent as `1` (limit) or `3` (market)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OrderType {
    /// Limit order
    Limit = 1,
    /// Market order
    Market = 3,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
        }
    }
}

/// Request to place an order
///
/// Serializes to the exact body `trade/order` expects. Price and quantity
/// go over the wire as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub contract_id: MarketId,
    pub side: OrderSide,
    pub price: Decimal,
    pub quantity: Decimal,
    pub order_type: OrderType,
}

impl OrderRequest {
    pub fn new(
        contract_id: MarketId,
        side: OrderSide,
        price: Decimal,
        quantity: Decimal,
        order_type: OrderType,
    ) -> Self {
        Self {
            contract_id,
            side,
            price,
            quantity,
            order_type,
        }
    }

    /// Create a limit order
    pub fn limit(contract_id: MarketId, side: OrderSide, price: Decimal, quantity: Decimal) -> Self {
        Self::new(contract_id, side, price, quantity, OrderType::Limit)
    }
}

/// Body of `trade/order/cancel`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CancelOrderBody {
    pub contract_id: MarketId,
    pub original_order_id: OrderId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_order_request_wire_format() {
        let order = OrderRequest::new(5, OrderSide::Buy, dec!(100.5), dec!(0.01), OrderType::Limit);
        let body = serde_json::to_value(&order).unwrap();

        assert_eq!(
            body,
            json!({
                "contractId": 5,
                "side": 1,
                "price": "100.5",
                "quantity": "0.01",
                "orderType": 1
            })
        );
    }

    #[test]
    fn test_sell_market_codes() {
        assert_eq!(serde_json::to_value(OrderSide::Sell).unwrap(), json!(-1));
        assert_eq!(serde_json::to_value(OrderType::Market).unwrap(), json!(3));
    }

    #[test]
    fn test_cancel_body_wire_format() {
        let body = CancelOrderBody {
            contract_id: 5,
            original_order_id: 987,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contractId": 5, "originalOrderId": 987})
        );
    }

    #[test]
    fn test_market_symbol_keeps_extra_fields() {
        let symbol: MarketSymbol = serde_json::from_value(json!({
            "id": 42,
            "name": "BTC-USDT",
            "pricePrecision": 2
        }))
        .unwrap();

        assert_eq!(symbol.id, 42);
        assert_eq!(symbol.name, "BTC-USDT");
        assert_eq!(symbol.extra.get("pricePrecision"), Some(&json!(2)));
    }

    #[test]
    fn test_server_time_accepts_number_or_string() {
        let from_number: ServerTime = serde_json::from_value(json!(1600000000000u64)).unwrap();
        let from_text: ServerTime = serde_json::from_value(json!("1600000000000")).unwrap();

        assert_eq!(from_number, ServerTime(1_600_000_000_000));
        assert_eq!(from_number, from_text);
    }
}
