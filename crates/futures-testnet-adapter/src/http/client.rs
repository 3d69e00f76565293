/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured client plus the shared request/response path
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing response handling
*/

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::auth::CredentialProvider;
use crate::http::error::{FuturesError, Result};
use crate::http::signature::{RequestSigner, canonical_query, timestamp_ms};

/// Base URL for the Binance USDT-M Futures testnet
const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key on every request
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Optional recvWindow (ms) appended to signed queries before the
    /// timestamp; the testnet rejects requests older than this window.
    pub recv_window: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window: None,
        }
    }
}

/// Client for the Binance USDT-M Futures testnet REST API.
///
/// Stateless per call: the only long-lived pieces are the credential pair
/// and the reused reqwest connection pool.
#[derive(Debug)]
pub struct FuturesClient {
    http: Client,
    base_url: Url,
    api_key: String,
    signer: RequestSigner,
    recv_window: Option<u64>,
}

impl FuturesClient {
    /// Create a client with default configuration against the testnet.
    pub fn new(provider: &dyn CredentialProvider) -> Result<Self> {
        Self::with_config(ClientConfig::default(), provider)
    }

    /// Create a client with custom configuration against the testnet.
    pub fn with_config(config: ClientConfig, provider: &dyn CredentialProvider) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL, provider)
    }

    /// Create a client against an explicit base URL (tests point this at a
    /// local mock server).
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        provider: &dyn CredentialProvider,
    ) -> Result<Self> {
        let credentials = provider.credentials()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            api_key: credentials.api_key,
            signer: RequestSigner::new(credentials.api_secret),
            recv_window: config.recv_window,
        })
    }

    /// One request, one response. All parameters travel in the query string
    /// (the testnet accepts query parameters on POST and DELETE as well).
    ///
    /// Signed requests get recvWindow (when configured), timestamp, and
    /// signature appended in that order.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut params: Vec<(&str, String)>,
        signed: bool,
    ) -> Result<T> {
        if !matches!(method, Method::GET | Method::POST | Method::DELETE) {
            return Err(FuturesError::validation(format!(
                "Unsupported HTTP method: {method}"
            )));
        }

        let mut url = self.base_url.join(path)?;
        let query = if signed {
            if let Some(window) = self.recv_window {
                params.push(("recvWindow", window.to_string()));
            }
            self.signer
                .sign_params(&params, timestamp_ms())
                .into_query_string()
        } else {
            canonical_query(&params)
        };
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        debug!(%method, path, signed, "sending request");

        let response = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, body_len = body.len(), "response received");

        decode_response(status, &body)
    }
}

/// Classify and decode a response body.
///
/// A body carrying both `code` and `msg` is an application-level rejection
/// regardless of HTTP status; the testnet has been seen returning such
/// bodies with status 200. The check runs before any status inspection.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let code = value.get("code").and_then(serde_json::Value::as_i64);
            let msg = value.get("msg").and_then(serde_json::Value::as_str);
            if let (Some(code), Some(message)) = (code, msg) {
                return Err(FuturesError::Api {
                    code,
                    message: message.to_string(),
                });
            }
            if !status.is_success() {
                return Err(FuturesError::from_status(status, body));
            }
            serde_json::from_value(value).map_err(Into::into)
        }
        Err(_) if !status.is_success() => Err(FuturesError::from_status(status, body)),
        Err(_) => Err(FuturesError::InvalidResponse(format!(
            "body is not JSON: {}",
            body.chars().take(200).collect::<String>()
        ))),
    }
}
