//! Shared fixtures for client integration tests

use bitasset_rest::{ApiUrls, BitAssetRestClient, ClientConfig, Credentials};
use httpmock::MockServer;
use serde_json::{json, Value};

pub const ACCESS_KEY: &str = "test_access_key";
pub const SECRET_KEY: &str = "test_secret_key";

/// Symbol list as returned by `symbols`, already wrapped in the envelope
pub fn symbols_response() -> Value {
    json!({
        "code": 0,
        "msg": "success",
        "data": [
            {"id": 41, "name": "ETH-USDT", "pricePrecision": 2},
            {"id": 42, "name": "BTC-USDT", "pricePrecision": 2}
        ]
    })
}

/// Currency list as returned by `currencies`
pub fn currencies_response() -> Value {
    json!({
        "code": 0,
        "data": [
            {"id": 1, "name": "BTC"},
            {"id": 7, "name": "USDT"}
        ]
    })
}

pub fn public_client(server: &MockServer) -> BitAssetRestClient {
    BitAssetRestClient::with_config(
        ClientConfig::new().with_urls(ApiUrls::with_host(server.base_url())),
    )
    .unwrap()
}

pub fn private_client(server: &MockServer) -> BitAssetRestClient {
    let creds = Credentials::new(ACCESS_KEY, SECRET_KEY).unwrap();
    BitAssetRestClient::with_config(
        ClientConfig::new()
            .with_credentials(creds)
            .with_urls(ApiUrls::with_host(server.base_url())),
    )
    .unwrap()
}

/// Serve a single request and hand back its request target
///
/// Returns the base URL to point a client at and a handle resolving to the
/// raw path-and-query of the request, exactly as it arrived on the wire.
pub async fn capture_one_request(
    response_body: Value,
) -> (String, tokio::task::JoinHandle<String>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before request head");
            head.extend_from_slice(&buf[..n]);
        }

        let body = response_body.to_string();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        let head = String::from_utf8(head).unwrap();
        let request_line = head.lines().next().unwrap().to_string();
        request_line.split(' ').nth(1).unwrap().to_string()
    });

    (base_url, handle)
}

/// Split a raw query string into ordered pairs, without decoding
pub fn raw_query_pairs(target: &str) -> Vec<(String, String)> {
    let query = target.split_once('?').map(|(_, q)| q).unwrap_or("");
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.to_string(), value.to_string())
        })
        .collect()
}

pub fn private_client_at(base_url: &str) -> BitAssetRestClient {
    let creds = Credentials::new(ACCESS_KEY, SECRET_KEY).unwrap();
    BitAssetRestClient::with_config(
        ClientConfig::new()
            .with_credentials(creds)
            .with_urls(ApiUrls::with_host(base_url)),
    )
    .unwrap()
}
