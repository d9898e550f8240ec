use std::time::{Duration, Instant};

use iced::Subscription;

use anonix_ui::{component::toast as ui, widget::Element};

pub use anonix_ui::component::toast::Kind;

pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(4000);

/// What a toast shows. Structured values are pretty-printed.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastPayload {
    Text(String),
    Json(serde_json::Value),
    Empty,
}

impl ToastPayload {
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Json(serde_json::Value::String(s)) => s.clone(),
            Self::Json(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
            Self::Empty => String::new(),
        }
    }
}

impl From<String> for ToastPayload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ToastPayload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<serde_json::Value> for ToastPayload {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Empty,
            v => Self::Json(v),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: Kind,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    Dismiss(u64),
}

/// The toasts currently on screen, oldest first.
#[derive(Debug)]
pub struct Toasts {
    timeout: Duration,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TIMEOUT)
    }
}

impl Toasts {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            next_id: 0,
            toasts: Vec::new(),
        }
    }

    pub fn show(&mut self, kind: Kind, payload: impl Into<ToastPayload>) -> u64 {
        self.show_for(kind, payload, self.timeout)
    }

    pub fn show_for(
        &mut self,
        kind: Kind,
        payload: impl Into<ToastPayload>,
        timeout: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            text: payload.into().to_text(),
            expires_at: Instant::now() + timeout,
        });
        id
    }

    pub fn success(&mut self, payload: impl Into<ToastPayload>) -> u64 {
        self.show(Kind::Success, payload)
    }

    pub fn error(&mut self, payload: impl Into<ToastPayload>) -> u64 {
        self.show(Kind::Error, payload)
    }

    /// Removes the toast, returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let len = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != len
    }

    /// Removes the toasts expired at `now` and returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let len = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        len - self.toasts.len()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => {
                self.expire(now);
            }
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            iced::time::every(Duration::from_millis(200)).map(Message::Tick)
        }
    }

    pub fn view(&self) -> Element<Message> {
        ui::stack(
            self.toasts
                .iter()
                .map(|t| ui::toast(t.kind, &t.text, Message::Dismiss(t.id)))
                .collect(),
        )
    }
}
