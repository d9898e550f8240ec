//! Tokenize and detokenize dialogs of the admin page.

use std::sync::Arc;

use tracing::info;

use super::{
    form::{Choice, Field, Form, Payload},
    modal::{Modal, SubmitFuture, BLANK_FIELD},
};
use crate::services::gateway::{Error, Gateway, TokenizeRequest};

pub const CUSTOM_TTL: &str = "custom";

pub const TTL_CHOICES: &[Choice] = &[
    Choice {
        value: "none",
        label: "No expiration",
    },
    Choice {
        value: "300",
        label: "5 minutes",
    },
    Choice {
        value: "3600",
        label: "1 hour",
    },
    Choice {
        value: "86400",
        label: "1 day",
    },
    Choice {
        value: CUSTOM_TTL,
        label: "Custom",
    },
];

/// Reads the time to live in seconds from the `ttl_select` and `ttl_custom`
/// fields. Anything unparsable means no expiration.
pub fn parse_ttl(payload: &Payload) -> Option<u64> {
    let select = payload.get("ttl_select")?.trim();
    if select == CUSTOM_TTL {
        let custom = payload.get("ttl_custom")?.trim();
        custom.parse::<u64>().ok().filter(|n| *n > 0)
    } else {
        select.parse::<u64>().ok()
    }
}

pub fn tokenize(gateway: Arc<dyn Gateway>, payload: Payload) -> SubmitFuture<String> {
    Box::pin(async move {
        let request = TokenizeRequest {
            plaintext: payload.get("plaintext").cloned().unwrap_or_default(),
            ttl: parse_ttl(&payload),
        };
        let ttl = request.ttl;
        let id = gateway.tokenize(request).await?;
        info!("Created token {} (ttl: {:?})", id, ttl);
        Ok(id)
    })
}

pub fn detokenize(gateway: Arc<dyn Gateway>, payload: Payload) -> SubmitFuture<String> {
    Box::pin(async move {
        let token = payload.get("token").map(|t| t.trim().to_string());
        match token {
            Some(token) if !token.is_empty() => gateway.detokenize(&token).await,
            _ => Err(Error::Validation(BLANK_FIELD.to_string())),
        }
    })
}

pub fn tokenize_modal() -> Modal<String> {
    Modal::new(
        "Tokenize",
        "Tokenize",
        Form::new(
            vec![
                Field::text("plaintext", "Plaintext").placeholder("Value to tokenize"),
                Field::select("ttl_select", "Time to live", TTL_CHOICES),
                Field::text("ttl_custom", "Time to live in seconds")
                    .placeholder("Seconds")
                    .shown_when("ttl_select", CUSTOM_TTL),
            ],
            "plaintext",
        ),
        tokenize,
    )
}

pub fn detokenize_modal() -> Modal<String> {
    Modal::new(
        "Detokenize",
        "Detokenize",
        Form::new(
            vec![Field::text("token", "Token").placeholder("Token id")],
            "token",
        ),
        detokenize,
    )
}
