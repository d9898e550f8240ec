//! Sign up and sign in dialogs of the login page.

use std::sync::Arc;

use tracing::info;

use super::{
    form::{Field, Form, Payload},
    modal::{Modal, Outcome, SubmitFuture},
};
use crate::{
    services::gateway::{Error, Gateway},
    validator::validate_password,
};

pub const REGISTERED: &str = "You are registered";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInAs {
    pub user_id: String,
    pub admin: bool,
}

impl Outcome for SignedInAs {
    fn message(&self) -> String {
        if self.admin {
            "Signed in as admin".to_string()
        } else {
            "Signed in as default user".to_string()
        }
    }
}

fn value<'a>(payload: &'a Payload, name: &str) -> &'a str {
    payload.get(name).map(String::as_str).unwrap_or("")
}

/// Creates the account once the passwords pass the local checks.
pub async fn register(
    gateway: &dyn Gateway,
    login: &str,
    password: &str,
    password_again: &str,
) -> Result<String, Error> {
    if password != password_again {
        return Err(Error::Validation(PASSWORDS_DO_NOT_MATCH.to_string()));
    }
    validate_password(password).map_err(|e| Error::Validation(e.to_string()))?;
    gateway.sign_up(login, password).await?;
    Ok(REGISTERED.to_string())
}

pub async fn authenticate(
    gateway: &dyn Gateway,
    login: &str,
    password: &str,
) -> Result<SignedInAs, Error> {
    let signed_in = gateway.sign_in(login, password).await?;
    let admin = gateway.is_admin(&signed_in.user_id).await?;
    info!("Signed in user {} (admin: {})", signed_in.user_id, admin);
    Ok(SignedInAs {
        user_id: signed_in.user_id,
        admin,
    })
}

pub fn sign_up(gateway: Arc<dyn Gateway>, payload: Payload) -> SubmitFuture<String> {
    Box::pin(async move {
        register(
            gateway.as_ref(),
            value(&payload, "login"),
            value(&payload, "password"),
            value(&payload, "password_again"),
        )
        .await
    })
}

pub fn sign_in(gateway: Arc<dyn Gateway>, payload: Payload) -> SubmitFuture<SignedInAs> {
    Box::pin(async move {
        authenticate(
            gateway.as_ref(),
            value(&payload, "login"),
            value(&payload, "password"),
        )
        .await
    })
}

pub fn sign_up_modal() -> Modal<String> {
    Modal::new(
        "Sign up",
        "Sign up",
        Form::new(
            vec![
                Field::text("login", "Login").placeholder("Login"),
                Field::password("password", "Password").placeholder("Password"),
                Field::password("password_again", "Repeat password")
                    .placeholder("Repeat password"),
            ],
            "login",
        ),
        sign_up,
    )
}

pub fn sign_in_modal() -> Modal<SignedInAs> {
    Modal::new(
        "Sign in",
        "Sign in",
        Form::new(
            vec![
                Field::text("login", "Login").placeholder("Login"),
                Field::password("password", "Password").placeholder("Password"),
            ],
            "login",
        ),
        sign_in,
    )
}
