/*
[INPUT]:  API key/secret pair from the environment or the caller
[OUTPUT]: Credentials handed to the client at construction time
[POS]:    Auth layer - explicit credential sourcing, no import-time globals
[UPDATE]: When credential sources or environment variable names change
*/

use crate::http::error::{FuturesError, Result};

/// Environment variables read by [`EnvCredentials`].
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// The long-lived API key/secret pair.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

/// Supplies credentials to the client constructor.
///
/// Absence of credentials is an initialization-time `Config` error, surfaced
/// before any network activity; it is never a per-call failure.
pub trait CredentialProvider {
    fn credentials(&self) -> Result<Credentials>;
}

/// Reads the key pair from the process environment at call time.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> Result<Credentials> {
        let api_key = read_env(API_KEY_ENV)?;
        let api_secret = read_env(API_SECRET_ENV)?;
        Ok(Credentials::new(api_key, api_secret))
    }
}

/// Fixed in-memory credentials, used by tests and embedding applications.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub Credentials);

impl CredentialProvider for StaticCredentials {
    fn credentials(&self) -> Result<Credentials> {
        Ok(self.0.clone())
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FuturesError::Config(format!(
            "{name} is not set. Export it or add it to a .env file"
        ))),
    }
}
