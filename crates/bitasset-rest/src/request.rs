//! Request descriptors, URL and header construction, response unwrapping

use crate::error::{RestError, RestResult};
use bitasset_auth::QueryParams;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Default public API host
pub const PUBLIC_API_URL: &str = "https://api.bitasset.com";
/// Default private API host
pub const PRIVATE_API_URL: &str = "https://api.bitasset.com";
/// Default API version path segment
pub const API_VERSION: &str = "v1";
/// Client identifier sent as `User-Agent`
pub const DEFAULT_USER_AGENT: &str = concat!("bitasset-rest/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt carried in a parse error
const BODY_EXCERPT_LEN: usize = 200;

/// Which API surface a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Unauthenticated market data
    Public,
    /// Signed account and trading endpoints
    Private,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A single API call, before signing
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub scope: Scope,
    pub method: HttpMethod,
    /// Path below the scope's base, e.g. `accounts/order/get`
    pub endpoint: String,
    pub query: QueryParams,
    /// JSON body, POST only
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(scope: Scope, method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            scope,
            method,
            endpoint: endpoint.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn public_get(endpoint: impl Into<String>) -> Self {
        Self::new(Scope::Public, HttpMethod::Get, endpoint)
    }

    pub fn private_get(endpoint: impl Into<String>) -> Self {
        Self::new(Scope::Private, HttpMethod::Get, endpoint)
    }

    pub fn private_post(endpoint: impl Into<String>) -> Self {
        Self::new(Scope::Private, HttpMethod::Post, endpoint)
    }

    /// Add a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Set the JSON body from any serializable value
    pub fn json<T: Serialize>(mut self, body: &T) -> RestResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Base URLs for both API scopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    pub public_url: String,
    pub private_url: String,
    pub version: String,
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self {
            public_url: PUBLIC_API_URL.to_string(),
            private_url: PRIVATE_API_URL.to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

impl ApiUrls {
    /// Point both scopes at the same host
    pub fn with_host(host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            public_url: host.clone(),
            private_url: host,
            version: API_VERSION.to_string(),
        }
    }

    /// Base path for a scope, without trailing slash
    pub fn base(&self, scope: Scope) -> String {
        match scope {
            Scope::Private => format!(
                "{}/{}/cash",
                self.private_url.trim_end_matches('/'),
                self.version
            ),
            Scope::Public => format!(
                "{}/{}/cash/public",
                self.public_url.trim_end_matches('/'),
                self.version
            ),
        }
    }

    /// Full request URL
    ///
    /// Appends `?query` only when `params` is non-empty.
    pub fn build_url(&self, scope: Scope, endpoint: &str, params: &QueryParams) -> String {
        let url = format!("{}/{}", self.base(scope), endpoint.trim_start_matches('/'));

        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params.to_url_query())
        }
    }
}

/// Headers sent with every request
pub fn build_headers(user_agent: &str) -> RestResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| RestError::InvalidParameter(format!("user agent: {}", e)))?,
    );
    Ok(headers)
}

/// Parse a response body as JSON
pub fn parse_body(status: u16, body: &str) -> RestResult<Value> {
    serde_json::from_str(body).map_err(|e| {
        let excerpt: String = body.chars().take(BODY_EXCERPT_LEN).collect();
        RestError::ResponseParse {
            status,
            message: format!("{} (body: {:?})", e, excerpt),
        }
    })
}

/// Strip the response envelope
///
/// Objects carrying a `data` key yield that value; anything else is
/// returned unchanged.
pub fn unwrap_envelope(response: Value) -> Value {
    match response {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
