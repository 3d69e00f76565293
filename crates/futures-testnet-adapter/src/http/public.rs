/*
[INPUT]:  Optional symbol filter
[OUTPUT]: Connectivity probe result and exchange metadata
[POS]:    HTTP layer - public endpoints (no signature required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;
use tracing::info;

use crate::http::client::FuturesClient;
use crate::http::error::Result;
use crate::types::ExchangeInfo;

impl FuturesClient {
    /// Connectivity probe.
    ///
    /// GET /fapi/v1/ping (unsigned)
    pub async fn ping(&self) -> Result<()> {
        let _: serde_json::Value = self
            .send(Method::GET, "/fapi/v1/ping", Vec::new(), false)
            .await?;
        info!("connectivity probe succeeded");
        Ok(())
    }

    /// Exchange trading rules and symbol metadata, optionally filtered.
    ///
    /// GET /fapi/v1/exchangeInfo (unsigned)
    pub async fn exchange_info(&self, symbol: Option<&str>) -> Result<ExchangeInfo> {
        let mut params = Vec::new();
        if let Some(symbol) = symbol {
            params.push(("symbol", symbol.to_string()));
        }
        self.send(Method::GET, "/fapi/v1/exchangeInfo", params, false)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::{Credentials, StaticCredentials};
    use crate::http::{ClientConfig, FuturesClient};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> FuturesClient {
        let provider = StaticCredentials(Credentials::new("test-key", "test-secret"));
        FuturesClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), &provider)
            .expect("client init")
    }

    #[tokio::test]
    async fn test_ping() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.ping().await.expect("ping failed");
    }

    #[tokio::test]
    async fn test_ping_transport_failure() {
        // bind an ephemeral port, then drop the listener so the connect is
        // guaranteed to be refused rather than filtered
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let dead_addr = listener.local_addr().expect("local addr");
        drop(listener);

        let provider = StaticCredentials(Credentials::new("test-key", "test-secret"));
        let client = FuturesClient::with_config_and_base_url(
            ClientConfig {
                connect_timeout: std::time::Duration::from_millis(200),
                ..ClientConfig::default()
            },
            &format!("http://{dead_addr}"),
            &provider,
        )
        .expect("client init");

        let err = client.ping().await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_exchange_info_with_symbol_filter() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "timezone": "UTC",
            "serverTime": 1700000000000,
            "symbols": [
                {
                    "symbol": "BTCUSDT",
                    "status": "TRADING",
                    "baseAsset": "BTC",
                    "quoteAsset": "USDT",
                    "pricePrecision": 2,
                    "quantityPrecision": 3
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v1/exchangeInfo"))
            .and(query_param("symbol", "BTCUSDT"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let info = client
            .exchange_info(Some("BTCUSDT"))
            .await
            .expect("exchange_info failed");

        assert_eq!(info.server_time, Some(1_700_000_000_000));
        assert_eq!(info.symbols.len(), 1);
        assert_eq!(info.symbols[0].quote_asset, "USDT");
        assert_eq!(info.symbols[0].quantity_precision, 3);
    }
}
