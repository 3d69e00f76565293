/*
[INPUT]:  Ordered request parameters and the API secret
[OUTPUT]: Canonical query string plus HMAC-SHA256 signature (lowercase hex)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or canonical encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Current time as integer milliseconds since the epoch.
///
/// Kept out of [`RequestSigner::sign_params`] so signing stays a pure
/// function of its arguments.
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Canonical query-string encoding: `key=value` pairs, values URL-encoded,
/// joined by `&`, in insertion order. The testnet validates the signature
/// over this literal string, so the pairs are never sorted or re-ordered.
pub fn canonical_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A signed parameter set, ready for transmission.
#[derive(Debug, Clone)]
pub struct SignedQuery {
    /// Canonical query including the injected timestamp, excluding the
    /// signature. This is the exact byte string the signature covers.
    query: String,
    pub timestamp: i64,
    pub signature: String,
}

impl SignedQuery {
    /// The string that was signed.
    pub fn signed_payload(&self) -> &str {
        &self.query
    }

    /// Full wire query: the signed payload with `signature` appended last.
    pub fn into_query_string(self) -> String {
        format!("{}&signature={}", self.query, self.signature)
    }
}

/// Signs request query strings for authenticated endpoints.
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never leak the secret through Debug output
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// HMAC-SHA256 over `payload`, keyed by the API secret, lowercase hex.
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Inject `timestamp` after the caller's parameters, capture the
    /// canonical encoding, and sign it. The signature is appended to the
    /// wire query only afterwards; it is never part of its own input.
    pub fn sign_params(&self, params: &[(&str, String)], timestamp: i64) -> SignedQuery {
        let mut all: Vec<(&str, String)> = params.to_vec();
        all.push(("timestamp", timestamp.to_string()));

        let query = canonical_query(&all);
        let signature = self.sign(&query);

        SignedQuery {
            query,
            timestamp,
            signature,
        }
    }
}
