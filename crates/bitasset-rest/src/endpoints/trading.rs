//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::client::BitAssetRestClient;
use crate::error::RestResult;
use crate::request::ApiRequest;
use crate::types::{CancelOrderBody, MarketId, OrderId, OrderRequest};
use serde_json::Value;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a BitAssetRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a BitAssetRestClient) -> Self {
        Self { client }
    }

    /// Place a new order
    ///
    /// # Returns
    /// The exchange's response payload, normally the new order id
    #[instrument(
        skip(self, order),
        fields(contract_id = order.contract_id, side = %order.side, order_type = %order.order_type)
    )]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        debug!(
            "Placing {} {} order for {} @ {}",
            order.side, order.order_type, order.quantity, order.price
        );

        let request = ApiRequest::private_post("trade/order").json(order)?;
        self.client.dispatch(request).await
    }

    /// Cancel an order
    ///
    /// The order id travels both in the query (`orderId`) and in the body
    /// (`originalOrderId`).
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, market_id: MarketId, order_id: OrderId) -> RestResult<Value> {
        let body = CancelOrderBody {
            contract_id: market_id,
            original_order_id: order_id,
        };

        let request = ApiRequest::private_post("trade/order/cancel")
            .query("orderId", order_id)
            .json(&body)?;
        self.client.dispatch(request).await
    }
}
