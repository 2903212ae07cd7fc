//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::BitAssetRestClient;
use crate::error::RestResult;
use crate::request::ApiRequest;
use crate::types::{MarketId, OrderId};
use serde_json::Value;
use tracing::instrument;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BitAssetRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BitAssetRestClient) -> Self {
        Self { client }
    }

    /// Get account balances
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.client.dispatch(ApiRequest::private_get("accounts/balance")).await
    }

    /// Get active orders
    ///
    /// # Arguments
    /// * `market_id` - Restrict to one market; all markets when `None`
    #[instrument(skip(self))]
    pub async fn get_active_orders(&self, market_id: Option<MarketId>) -> RestResult<Value> {
        let mut request = ApiRequest::private_get("accounts/order/active");
        if let Some(market_id) = market_id {
            request = request.query("contractId", market_id);
        }

        self.client.dispatch(request).await
    }

    /// Get details of a single order
    #[instrument(skip(self))]
    pub async fn get_order_info(&self, order_id: OrderId) -> RestResult<Value> {
        let request = ApiRequest::private_get("accounts/order/get").query("orderId", order_id);
        self.client.dispatch(request).await
    }
}
