//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode an unwrapped payload into the shape a helper needs
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> RestResult<T> {
    serde_json::from_value(value).map_err(|e| RestError::Decode(e.to_string()))
}
