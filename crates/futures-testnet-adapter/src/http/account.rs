/*
[INPUT]:  Signed query with timestamp and signature
[OUTPUT]: Account balances and open positions
[POS]:    HTTP layer - account endpoints (signature required)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::client::FuturesClient;
use crate::http::error::Result;
use crate::types::AccountInfo;

impl FuturesClient {
    /// Current account information including balances and positions.
    ///
    /// GET /fapi/v2/account (signed)
    pub async fn account_info(&self) -> Result<AccountInfo> {
        self.send(Method::GET, "/fapi/v2/account", Vec::new(), true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::{Credentials, StaticCredentials};
    use crate::http::{ClientConfig, FuturesClient};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_account_info() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "assets": [
                {"asset": "USDT", "walletBalance": "10000.5", "availableBalance": "9500.25"},
                {"asset": "BTC", "walletBalance": "0", "availableBalance": "0"}
            ],
            "positions": [
                {"symbol": "BTCUSDT", "positionAmt": "0.002", "entryPrice": "61000.0", "unrealizedProfit": "12.5"}
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/fapi/v2/account"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = StaticCredentials(Credentials::new("test-key", "test-secret"));
        let client = FuturesClient::with_config_and_base_url(
            ClientConfig::default(),
            &server.uri(),
            &provider,
        )
        .expect("client init");

        let info = client.account_info().await.expect("account_info failed");
        assert_eq!(info.assets.len(), 2);
        assert_eq!(info.assets[0].asset, "USDT");
        assert_eq!(info.assets[0].wallet_balance, "10000.5".parse().unwrap());
        assert_eq!(info.positions.len(), 1);
        assert_eq!(info.positions[0].position_amt, "0.002".parse().unwrap());
    }
}
