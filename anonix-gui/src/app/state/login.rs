use std::sync::Arc;

use iced::{Subscription, Task};

use anonix_ui::widget::Element;

use crate::{
    app::{
        auth::{self, SignedInAs},
        modal::{self, Modal},
        toast::Toasts,
        view,
    },
    services::gateway::Gateway,
};

#[derive(Debug, Clone)]
pub enum Message {
    OpenSignIn,
    OpenSignUp,
    SignIn(modal::Message<SignedInAs>),
    SignUp(modal::Message<String>),
}

pub struct LoginPage {
    sign_in: Modal<SignedInAs>,
    sign_up: Modal<String>,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self {
            sign_in: auth::sign_in_modal(),
            sign_up: auth::sign_up_modal(),
        }
    }
}

impl LoginPage {
    pub fn sign_in(&self) -> &Modal<SignedInAs> {
        &self.sign_in
    }

    pub fn sign_up(&self) -> &Modal<String> {
        &self.sign_up
    }

    /// Returns the signed in user once a sign in succeeded.
    pub fn update(
        &mut self,
        gateway: &Arc<dyn Gateway>,
        message: Message,
        toasts: &mut Toasts,
    ) -> (Task<Message>, Option<SignedInAs>) {
        match message {
            Message::OpenSignIn => {
                let _ = self.sign_up.close();
                (self.sign_in.open(None).map(Message::SignIn), None)
            }
            Message::OpenSignUp => {
                let _ = self.sign_in.close();
                (self.sign_up.open(None).map(Message::SignUp), None)
            }
            Message::SignIn(msg) => {
                let (task, outcome) = self.sign_in.update(gateway, msg, toasts);
                (task.map(Message::SignIn), outcome)
            }
            Message::SignUp(msg) => {
                let (task, _) = self.sign_up.update(gateway, msg, toasts);
                (task.map(Message::SignUp), None)
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            self.sign_in.subscription().map(Message::SignIn),
            self.sign_up.subscription().map(Message::SignUp),
        ])
    }

    pub fn view(&self) -> Element<Message> {
        view::login::login(self)
    }
}
