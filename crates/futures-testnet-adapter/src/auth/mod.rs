/*
[INPUT]:  Credential sources (environment, in-memory)
[OUTPUT]: Credentials for client construction
[POS]:    Auth layer - module wiring
[UPDATE]: When credential sources change
*/

pub mod credentials;

pub use credentials::{
    API_KEY_ENV, API_SECRET_ENV, CredentialProvider, Credentials, EnvCredentials,
    StaticCredentials,
};
