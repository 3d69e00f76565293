/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for futures-testnet-adapter tests

use futures_testnet_adapter::{ClientConfig, Credentials, FuturesClient, StaticCredentials};
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client wired to the mock server with fixed test credentials
pub fn test_client(server: &MockServer) -> FuturesClient {
    let provider = StaticCredentials(Credentials::new(TEST_API_KEY, TEST_API_SECRET));
    FuturesClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), &provider)
        .expect("client init")
}

/// Matches requests whose query string contains the given key.
///
/// Signed queries carry a fresh timestamp, so exact-value matchers cannot
/// be used for the timestamp/signature pair.
pub struct HasQueryKey(pub &'static str);

impl Match for HasQueryKey {
    fn matches(&self, request: &Request) -> bool {
        request.url.query_pairs().any(|(k, _)| k == self.0)
    }
}

/// Matches requests whose query string lacks the given key.
#[allow(dead_code)]
pub struct LacksQueryKey(pub &'static str);

impl Match for LacksQueryKey {
    fn matches(&self, request: &Request) -> bool {
        request.url.query_pairs().all(|(k, _)| k != self.0)
    }
}

/// A plausible order acknowledgement body for the mock testnet.
pub fn order_response_body(symbol: &str, order_type: &str) -> String {
    format!(
        r#"{{
            "orderId": 3371337,
            "clientOrderId": "x-abc123",
            "symbol": "{symbol}",
            "status": "NEW",
            "side": "BUY",
            "type": "{order_type}",
            "origQty": "0.001",
            "executedQty": "0",
            "price": "0",
            "avgPrice": "0",
            "updateTime": 1700000000000
        }}"#
    )
}
