/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public futures testnet adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod validate;

// Re-export commonly used types from auth
pub use auth::{CredentialProvider, Credentials, EnvCredentials, StaticCredentials};

// Re-export commonly used types from http
pub use http::{ClientConfig, FuturesClient, FuturesError, RequestSigner, Result};

// Re-export all types
pub use types::*;

// Re-export the validator
pub use validate::{Validator, ValidatorConfig};
