use std::{sync::Arc, time::Duration};

use iced::{widget::stack, Subscription, Task};
use tracing::{error, info, warn};

use anonix_ui::widget::Element;

use crate::{
    app::{
        state::{admin, login, AdminPage, LoginPage},
        toast::{self, Toasts},
    },
    services::gateway::{Error, Gateway, GatewayClient},
    VERSION,
};

/// Opens a new gateway session, with an empty cookie store.
pub type Connect = Arc<dyn Fn() -> Result<Arc<dyn Gateway>, Error> + Send + Sync>;

/// Connector of the HTTP gateway found at `api_url`.
pub fn http_connect(api_url: String) -> Connect {
    Arc::new(move || {
        let client = GatewayClient::new(api_url.clone())?;
        Ok(Arc::new(client) as Arc<dyn Gateway>)
    })
}

pub struct Config {
    pub connect: Connect,
    pub toast_timeout: Duration,
}

pub enum Page {
    Login(LoginPage),
    Admin(AdminPage),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    Login(login::Message),
    Admin(admin::Message),
    Toast(toast::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

pub struct GUI {
    page: Page,
    toasts: Toasts,
    gateway: Arc<dyn Gateway>,
    connect: Connect,
}

impl GUI {
    pub fn title(&self) -> String {
        match self.page {
            Page::Login(_) => format!("Anonix v{}", VERSION),
            Page::Admin(_) => format!("Anonix v{} - Admin", VERSION),
        }
    }

    pub fn new(config: Config) -> Result<(GUI, Task<Message>), Error> {
        let gateway = (config.connect)()?;
        let gui = Self {
            page: Page::Login(LoginPage::default()),
            toasts: Toasts::new(config.toast_timeout),
            gateway,
            connect: config.connect,
        };
        Ok((gui, Task::perform(ctrl_c(), |_| Message::CtrlC)))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::Toast(msg) => {
                self.toasts.update(msg);
                Task::none()
            }
            Message::Login(msg) => {
                let Page::Login(page) = &mut self.page else {
                    return Task::none();
                };
                let (task, signed_in) = page.update(&self.gateway, msg, &mut self.toasts);
                let task = task.map(Message::Login);
                match signed_in {
                    Some(user) if user.admin => {
                        info!("Opening the admin page for user {}", user.user_id);
                        let (page, load) = AdminPage::new(&self.gateway);
                        self.page = Page::Admin(page);
                        load.map(Message::Admin)
                    }
                    _ => task,
                }
            }
            Message::Admin(admin::Message::Logout) => {
                self.logout();
                Task::none()
            }
            Message::Admin(msg) => {
                let Page::Admin(page) = &mut self.page else {
                    return Task::none();
                };
                page.update(&self.gateway, msg, &mut self.toasts)
                    .map(Message::Admin)
            }
        }
    }

    /// Back to the login page with a new session.
    fn logout(&mut self) {
        match (self.connect)() {
            Ok(gateway) => self.gateway = gateway,
            Err(e) => {
                warn!("Failed to open a new session: {}", e);
                self.toasts.error(e.to_string());
            }
        }
        info!("Signed out");
        self.page = Page::Login(LoginPage::default());
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let page = match &self.page {
            Page::Login(p) => p.subscription().map(Message::Login),
            Page::Admin(p) => p.subscription().map(Message::Admin),
        };
        Subscription::batch(vec![page, self.toasts.subscription().map(Message::Toast)])
    }

    pub fn view(&self) -> Element<Message> {
        let page = match &self.page {
            Page::Login(p) => p.view().map(Message::Login),
            Page::Admin(p) => p.view().map(Message::Admin),
        };
        stack![page, self.toasts.view().map(Message::Toast)].into()
    }
}
