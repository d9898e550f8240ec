//! Access to the tokenization gateway.

pub mod api;
pub mod client;

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::GatewayClient;

/// Failures of a gateway call, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("Session expired, please sign in again")]
    SessionExpired,
    #[error("Invalid login or password")]
    InvalidCredentials,
    #[error("A user with this login already exists")]
    Conflict,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Error {status} {message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unexpected response from server: {0}")]
    UnexpectedShape(String),
    #[error("Failed to decode plaintext: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub user_id: String,
}

/// A token mapping held by the gateway, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: String,
    pub cipher_text: String,
    pub wrapped_key: String,
    /// Human readable time to live, empty if the token never expires.
    pub ttl: String,
    pub created_at: Option<DateTime<Utc>>,
    pub deterministic: Option<bool>,
    pub reversible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeRequest {
    pub plaintext: String,
    /// Time to live of the token in seconds, `None` for no expiration.
    pub ttl: Option<u64>,
}

#[async_trait]
pub trait Gateway: Debug + Send + Sync {
    async fn sign_up(&self, login: &str, password: &str) -> Result<(), Error>;
    async fn sign_in(&self, login: &str, password: &str) -> Result<SignedIn, Error>;
    async fn is_admin(&self, user_id: &str) -> Result<bool, Error>;
    async fn list_mappings(&self) -> Result<Vec<Mapping>, Error>;
    async fn delete_mapping(&self, id: &str) -> Result<(), Error>;
    /// Returns the id of the new token.
    async fn tokenize(&self, request: TokenizeRequest) -> Result<String, Error>;
    /// Returns the plaintext behind the token.
    async fn detokenize(&self, token: &str) -> Result<String, Error>;
}
