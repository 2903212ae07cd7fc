//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{
    build_headers, parse_body, unwrap_envelope, ApiRequest, ApiUrls, HttpMethod, Scope,
    DEFAULT_USER_AGENT,
};
use crate::types::{CurrencyId, MarketId, OrderId, OrderRequest, ServerTime};
use bitasset_auth::Credentials;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// BitAsset REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap
/// and clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use bitasset_rest::{BitAssetRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitAssetRestClient::new()?;
///     let book = client.get_order_book("BTC-USDT").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BitAssetRestClient::with_credentials(creds)?;
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitAssetRestClient {
    http_client: Client,
    urls: ApiUrls,
    credentials: Option<Credentials>,
}

impl BitAssetRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(build_headers(user_agent)?)
            .build()?;

        info!(
            public_url = %config.urls.public_url,
            private_url = %config.urls.private_url,
            timeout_secs = config.timeout_secs,
            "Created BitAsset REST client"
        );

        Ok(Self {
            http_client,
            urls: config.urls,
            credentials: config.credentials,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base URLs this client targets
    pub fn urls(&self) -> &ApiUrls {
        &self.urls
    }

    /// Send a request and return the unwrapped `data` payload
    ///
    /// Private requests are signed first; their query is replaced by the
    /// signed envelope. POST requests without a body send `{}`.
    #[instrument(
        skip(self, request),
        fields(scope = %request.scope, method = %request.method, endpoint = %request.endpoint)
    )]
    pub async fn dispatch(&self, request: ApiRequest) -> RestResult<Value> {
        let query = match request.scope {
            Scope::Private => self.require_credentials()?.sign(&request.query),
            Scope::Public => request.query,
        };

        let url = self.urls.build_url(request.scope, &request.endpoint, &query);
        debug!("Sending request");

        let builder = match request.method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => {
                let body = request.body.unwrap_or_else(|| Value::Object(Map::new()));
                self.http_client.post(&url).json(&body)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Request returned non-success status");
        }

        let value = parse_body(status.as_u16(), &text)?;
        Ok(unwrap_envelope(value))
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// List all trading pairs
    pub async fn list_markets(&self) -> RestResult<Value> {
        self.market().list_markets().await
    }

    /// Resolve a trading pair name (case-insensitive) to its contract id
    pub async fn get_market_id(&self, pair: &str) -> RestResult<MarketId> {
        self.market().get_market_id(pair).await
    }

    /// List all currencies
    pub async fn list_currencies(&self) -> RestResult<Value> {
        self.market().list_currencies().await
    }

    /// Resolve a currency code (case-insensitive) to its id
    pub async fn get_currency_id(&self, currency: &str) -> RestResult<CurrencyId> {
        self.market().get_currency_id(currency).await
    }

    /// Get server time
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        self.market().get_server_time().await
    }

    /// Get orderbook depth for a trading pair
    pub async fn get_order_book(&self, pair: &str) -> RestResult<Value> {
        self.market().get_order_book(pair).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(self))
    }

    /// Get account balances
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.account()?.get_balances().await
    }

    /// Get active orders, optionally for one market
    pub async fn get_active_orders(&self, market_id: Option<MarketId>) -> RestResult<Value> {
        self.account()?.get_active_orders(market_id).await
    }

    /// Get details of a single order
    pub async fn get_order_info(&self, order_id: OrderId) -> RestResult<Value> {
        self.account()?.get_order_info(order_id).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(self))
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading()?.place_order(order).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, market_id: MarketId, order_id: OrderId) -> RestResult<Value> {
        self.trading()?.cancel_order(market_id, order_id).await
    }

    fn require_credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }
}

impl std::fmt::Debug for BitAssetRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitAssetRestClient")
            .field("urls", &self.urls)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// API hosts and version
    pub urls: ApiUrls,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            urls: ApiUrls::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set API hosts and version
    pub fn with_urls(mut self, urls: ApiUrls) -> Self {
        self.urls = urls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = BitAssetRestClient::new().unwrap();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_urls(ApiUrls::with_host("http://127.0.0.1:9000"));

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.urls.private_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(ClientConfig::default().timeout_secs, 30);
    }

    #[test]
    fn test_auth_required_error() {
        let client = BitAssetRestClient::new().unwrap();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("access_key_123", "super_secret").unwrap();
        let client = BitAssetRestClient::with_credentials(creds).unwrap();

        let debug = format!("{:?}", client);
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("super_secret"));
    }
}
