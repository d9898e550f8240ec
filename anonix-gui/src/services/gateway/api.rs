//! Wire format of the gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::{Error, Mapping};
use crate::convert;

/// Role given to accounts created from the console.
pub const DEFAULT_ROLE_ID: u8 = 2;

pub mod payload {
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct SignUp<'a> {
        pub login: &'a str,
        pub password: &'a str,
        pub role_id: u8,
    }

    #[derive(Serialize)]
    pub struct SignIn<'a> {
        pub login: &'a str,
        pub password: &'a str,
    }

    #[derive(Serialize)]
    pub struct IsAdmin<'a> {
        pub user_id: &'a str,
    }

    #[derive(Serialize)]
    pub struct Tokenize {
        /// Standard base64 of the UTF-8 plaintext.
        pub plaintext: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub token_ttl: Option<u64>,
        pub deterministic: bool,
        pub reversible: bool,
    }

    #[derive(Serialize)]
    pub struct Detokenize<'a> {
        pub token: &'a str,
    }
}

#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct IsAdminResponse {
    pub result: bool,
}

#[derive(Debug, Deserialize)]
pub struct TokenizeResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct DetokenizeResponse {
    /// Standard base64 of the plaintext bytes.
    pub plaintext: String,
}

/// Integer that protobuf JSON may encode as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Int {
    Number(i64),
    Text(String),
}

impl Int {
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SecondsNanos {
    #[serde(default)]
    pub seconds: Option<Int>,
    #[serde(default)]
    pub nanos: Option<Int>,
}

impl SecondsNanos {
    fn parts(&self) -> Option<(i64, i64)> {
        let seconds = match &self.seconds {
            Some(s) => s.value()?,
            None => 0,
        };
        let nanos = match &self.nanos {
            Some(n) => n.value()?,
            None => 0,
        };
        Some((seconds, nanos))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Ttl {
    Duration(SecondsNanos),
    Seconds(i64),
    /// Preformatted, or the protobuf JSON form such as `"3600s"`.
    Text(String),
}

impl Ttl {
    pub fn to_human(&self) -> String {
        match self {
            Self::Duration(d) => d
                .parts()
                .map(|(s, n)| convert::ttl_to_human(s, n))
                .unwrap_or_default(),
            Self::Seconds(s) => convert::ttl_to_human(*s, 0),
            Self::Text(t) => match t.strip_suffix('s').and_then(|s| s.parse::<f64>().ok()) {
                Some(secs) if secs.is_finite() => convert::ttl_to_human(secs.trunc() as i64, 0),
                _ => t.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    SecondsNanos(SecondsNanos),
    Rfc3339(String),
}

impl Timestamp {
    pub fn to_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::SecondsNanos(t) => t
                .parts()
                .and_then(|(s, n)| convert::timestamp_to_date(s, n)),
            Self::Rfc3339(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MappingRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub cipher_text: Option<String>,
    #[serde(default)]
    pub dek_wrapped: Option<String>,
    #[serde(default)]
    pub token_ttl: Option<Ttl>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub deterministic: Option<bool>,
    #[serde(default)]
    pub reversible: Option<bool>,
}

impl TryFrom<MappingRecord> for Mapping {
    type Error = Error;
    fn try_from(record: MappingRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::UnexpectedShape("mapping without id".to_string()))?;
        Ok(Mapping {
            id,
            cipher_text: record.cipher_text.unwrap_or_default(),
            wrapped_key: record.dek_wrapped.unwrap_or_default(),
            ttl: record
                .token_ttl
                .as_ref()
                .map(Ttl::to_human)
                .unwrap_or_default(),
            created_at: record.created_at.as_ref().and_then(Timestamp::to_date),
            deterministic: record.deterministic,
            reversible: record.reversible,
        })
    }
}

/// Reads the body of the mapping list endpoint.
///
/// The gateway encodes an empty list as `null`. Any other body that is not
/// an array is rejected.
pub fn parse_mappings(body: serde_json::Value) -> Result<Vec<Mapping>, Error> {
    match body {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<MappingRecord>(item)
                    .map_err(|e| Error::UnexpectedShape(format!("invalid mapping: {}", e)))
                    .and_then(Mapping::try_from)
            })
            .collect(),
        other => Err(Error::UnexpectedShape(format!(
            "expected a list of mappings, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
