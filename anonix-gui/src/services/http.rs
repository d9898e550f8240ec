use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::gateway::Error;

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl NotSuccessResponseInfo {
    /// The `error` field of a JSON error body, else a body that is a JSON
    /// string, else the raw body, else the canonical reason of the status code.
    pub fn error_message(&self) -> String {
        serde_json::from_str::<ErrorBody>(&self.text)
            .ok()
            .and_then(|body| body.error)
            .or_else(|| serde_json::from_str::<String>(&self.text).ok())
            .filter(|e| !e.trim().is_empty())
            .or_else(|| {
                let text = self.text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .or_else(|| {
                StatusCode::from_u16(self.status_code)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_default()
    }
}

impl From<NotSuccessResponseInfo> for Error {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Error::Http {
            status: info.status_code,
            message: info.error_message(),
        }
    }
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

/// HTTP client carrying the gateway session.
///
/// The session cookies set by the sign in endpoint live in the client cookie
/// store and are sent with every later request. Dropping the client drops the
/// session.
#[derive(Debug, Clone)]
pub struct SessionClient {
    base_url: String,
    http: reqwest::Client,
}

impl SessionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(format!("anonix-gui/{}", crate::VERSION))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Sending http request: {} {}", method, url);
        self.http
            .request(method, url)
            .header("Content-Type", "application/json")
    }

    /// Sends the request and hands back the response whatever its status.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        Ok(request.send().await?)
    }

    /// Like [`SessionClient::send`], but an unauthorized response means the
    /// session is gone and is returned as [`Error::SessionExpired`].
    pub async fn send_authenticated(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = self.send(request).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session expired: {}", response.url());
            return Err(Error::SessionExpired);
        }
        Ok(response)
    }
}
