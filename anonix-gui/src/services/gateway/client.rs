use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use super::{
    api::{self, payload},
    Error, Gateway, Mapping, SignedIn, TokenizeRequest,
};
use crate::services::http::{ResponseExt, SessionClient};

#[derive(Debug, Clone)]
pub struct GatewayClient {
    session: SessionClient,
}

impl GatewayClient {
    /// Creates a client with a fresh session for the gateway at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            session: SessionClient::new(base_url)?,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    response
        .json()
        .await
        .map_err(|e| Error::UnexpectedShape(e.to_string()))
}

#[async_trait]
impl Gateway for GatewayClient {
    async fn sign_up(&self, login: &str, password: &str) -> Result<(), Error> {
        let request = self
            .session
            .request(Method::POST, "/auth/signUp")
            .json(&payload::SignUp {
                login,
                password,
                role_id: api::DEFAULT_ROLE_ID,
            });
        self.session
            .send(request)
            .await?
            .check_success()
            .await
            .map_err(|info| match info.status_code {
                409 => Error::Conflict,
                _ => info.into(),
            })?;
        tracing::info!("Registered user {}", login);
        Ok(())
    }

    async fn sign_in(&self, login: &str, password: &str) -> Result<SignedIn, Error> {
        let request = self
            .session
            .request(Method::POST, "/auth/signIn")
            .json(&payload::SignIn { login, password });
        let response = self
            .session
            .send(request)
            .await?
            .check_success()
            .await
            .map_err(|info| match info.status_code {
                401 => Error::InvalidCredentials,
                _ => info.into(),
            })?;
        let res: api::SignInResponse = decode(response).await?;
        tracing::info!("Signed in as {}", res.user_id);
        Ok(SignedIn {
            user_id: res.user_id,
        })
    }

    async fn is_admin(&self, user_id: &str) -> Result<bool, Error> {
        let request = self
            .session
            .request(Method::POST, "/user/isAdmin")
            .json(&payload::IsAdmin { user_id });
        let response = self.session.send(request).await?.check_success().await?;
        let res: api::IsAdminResponse = decode(response).await?;
        Ok(res.result)
    }

    async fn list_mappings(&self) -> Result<Vec<Mapping>, Error> {
        let request = self.session.request(Method::GET, "/mappings/");
        let response = self
            .session
            .send_authenticated(request)
            .await?
            .check_success()
            .await?;
        let body: serde_json::Value = decode(response).await?;
        let mappings = api::parse_mappings(body)?;
        tracing::debug!("Received {} mappings", mappings.len());
        Ok(mappings)
    }

    async fn delete_mapping(&self, id: &str) -> Result<(), Error> {
        let request = self
            .session
            .request(Method::DELETE, &format!("/mappings/{}", id));
        self.session
            .send_authenticated(request)
            .await?
            .check_success()
            .await?;
        tracing::info!("Deleted mapping {}", id);
        Ok(())
    }

    async fn tokenize(&self, request: TokenizeRequest) -> Result<String, Error> {
        let request = self
            .session
            .request(Method::POST, "/tokenizer/tokenize")
            .json(&payload::Tokenize {
                plaintext: STANDARD.encode(request.plaintext.as_bytes()),
                token_ttl: request.ttl,
                deterministic: true,
                reversible: true,
            });
        let response = self
            .session
            .send_authenticated(request)
            .await?
            .check_success()
            .await?;
        let res: api::TokenizeResponse = decode(response).await?;
        Ok(res.id)
    }

    async fn detokenize(&self, token: &str) -> Result<String, Error> {
        let request = self
            .session
            .request(Method::POST, "/tokenizer/detokenize")
            .json(&payload::Detokenize { token });
        let response = self
            .session
            .send_authenticated(request)
            .await?
            .check_success()
            .await
            .map_err(|info| match info.status_code {
                400 => Error::InvalidToken,
                _ => info.into(),
            })?;
        let res: api::DetokenizeResponse = decode(response).await?;
        let bytes = STANDARD
            .decode(res.plaintext.trim())
            .map_err(|e| Error::Decode(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::Decode(e.to_string()))
    }
}
