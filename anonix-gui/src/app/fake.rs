//! In-memory gateway used by the state tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::gateway::{Error, Gateway, Mapping, SignedIn, TokenizeRequest};

#[derive(Debug, Default)]
pub struct FakeGateway {
    pub admin: bool,
    /// Returned by every call when set.
    pub failure: Option<Error>,
    pub mappings: Mutex<Vec<Mapping>>,
    pub plaintext: String,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) tokenized: Mutex<Vec<TokenizeRequest>>,
}

impl FakeGateway {
    pub fn with_mappings(ids: &[&str]) -> Self {
        Self {
            mappings: Mutex::new(ids.iter().map(|id| mapping(id)).collect()),
            ..Default::default()
        }
    }

    pub fn failing(error: Error) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokenized(&self) -> Vec<TokenizeRequest> {
        self.tokenized.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), Error> {
        self.calls.lock().unwrap().push(call.to_string());
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

pub fn mapping(id: &str) -> Mapping {
    Mapping {
        id: id.to_string(),
        cipher_text: format!("cipher-{}", id),
        wrapped_key: format!("key-{}", id),
        ttl: String::new(),
        created_at: None,
        deterministic: Some(true),
        reversible: Some(true),
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn sign_up(&self, _login: &str, _password: &str) -> Result<(), Error> {
        self.record("sign_up")
    }

    async fn sign_in(&self, login: &str, _password: &str) -> Result<SignedIn, Error> {
        self.record("sign_in")?;
        Ok(SignedIn {
            user_id: format!("id-{}", login),
        })
    }

    async fn is_admin(&self, _user_id: &str) -> Result<bool, Error> {
        self.record("is_admin")?;
        Ok(self.admin)
    }

    async fn list_mappings(&self) -> Result<Vec<Mapping>, Error> {
        self.record("list_mappings")?;
        Ok(self.mappings.lock().unwrap().clone())
    }

    async fn delete_mapping(&self, id: &str) -> Result<(), Error> {
        self.record("delete_mapping")?;
        self.mappings.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn tokenize(&self, request: TokenizeRequest) -> Result<String, Error> {
        self.record("tokenize")?;
        self.tokenized.lock().unwrap().push(request);
        Ok("tok-1".to_string())
    }

    async fn detokenize(&self, _token: &str) -> Result<String, Error> {
        self.record("detokenize")?;
        Ok(self.plaintext.clone())
    }
}
