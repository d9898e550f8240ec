//! Dialog lifecycle: open/close, focus ring, form submission and messages.

use std::{
    fmt::Debug,
    future::Future,
    pin::Pin,
    sync::Arc,
    time::{Duration, Instant},
};

use iced::{
    event::{self, Event},
    keyboard::{self, key::Named, Key},
    widget::text_input,
    window, Subscription, Task,
};
use tracing::warn;

use super::{
    form::{Choice, Form, Payload},
    toast::{Kind, Toasts},
};
use crate::services::gateway::{Error, Gateway};

pub const INLINE_MESSAGE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_FAILURE: &str = "Failed to complete the operation";
pub const BLANK_FIELD: &str = "Please enter text.";
pub const EMPTY_RESPONSE: &str = "empty response";

/// Result of a successful submission.
pub trait Outcome: Debug + Clone + Send + 'static {
    /// Text shown to the user. An empty text means the submission failed.
    fn message(&self) -> String;
}

impl Outcome for String {
    fn message(&self) -> String {
        self.clone()
    }
}

pub type SubmitFuture<O> = Pin<Box<dyn Future<Output = Result<O, Error>> + Send>>;

/// The action run with the form values when the dialog is submitted.
pub type Submit<O> = fn(Arc<dyn Gateway>, Payload) -> SubmitFuture<O>;

#[derive(Debug, Clone)]
pub enum Message<O> {
    Input(&'static str, String),
    Select(&'static str, Choice),
    Submit,
    Submitted(Result<O, Error>),
    Close,
    FocusNext,
    FocusPrevious,
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub kind: Kind,
    pub text: String,
    expires_at: Instant,
}

pub struct Modal<O> {
    pub title: &'static str,
    pub submit_label: &'static str,
    form: Form,
    submit: Submit<O>,
    open: bool,
    submitting: bool,
    inline: Option<Inline>,
    focused: Option<text_input::Id>,
    restore_focus: Option<text_input::Id>,
}

impl<O: Outcome> Modal<O> {
    pub fn new(
        title: &'static str,
        submit_label: &'static str,
        form: Form,
        submit: Submit<O>,
    ) -> Self {
        Self {
            title,
            submit_label,
            form,
            submit,
            open: false,
            submitting: false,
            inline: None,
            focused: None,
            restore_focus: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn inline(&self) -> Option<&Inline> {
        self.inline.as_ref()
    }

    pub fn focused(&self) -> Option<&text_input::Id> {
        self.focused.as_ref()
    }

    /// Resets the form, clears the previous message and focuses the first
    /// input. `restore_focus` gets the focus back once the dialog closes.
    pub fn open(&mut self, restore_focus: Option<text_input::Id>) -> Task<Message<O>> {
        self.form.reset();
        self.hide_inline();
        self.restore_focus = restore_focus;
        self.open = true;
        self.focused = self.form.focus_ring().first().map(|f| f.id.clone());
        match &self.focused {
            Some(id) => text_input::focus(id.clone()),
            None => Task::none(),
        }
    }

    pub fn close(&mut self) -> Task<Message<O>> {
        self.open = false;
        self.focused = None;
        match self.restore_focus.take() {
            Some(id) => text_input::focus(id),
            None => Task::none(),
        }
    }

    pub fn show_inline(&mut self, kind: Kind, text: impl Into<String>) {
        self.inline = Some(Inline {
            kind,
            text: text.into(),
            expires_at: Instant::now() + INLINE_MESSAGE_TIMEOUT,
        });
    }

    pub fn hide_inline(&mut self) {
        self.inline = None;
    }

    /// Handles a dialog message. Returns the outcome of a submission that
    /// just succeeded.
    pub fn update(
        &mut self,
        gateway: &Arc<dyn Gateway>,
        message: Message<O>,
        toasts: &mut Toasts,
    ) -> (Task<Message<O>>, Option<O>) {
        match message {
            Message::Input(name, value) => {
                self.focused = self.form.field(name).map(|f| f.id.clone());
                self.form.set(name, value);
            }
            Message::Select(name, choice) => {
                if let Some(id) = self.form.set(name, choice.value.to_string()) {
                    self.focused = Some(id.clone());
                    return (text_input::focus(id), None);
                }
            }
            Message::Submit => return (self.submit(gateway), None),
            Message::Submitted(res) => {
                self.submitting = false;
                let res = res.and_then(|outcome| {
                    if outcome.message().trim().is_empty() {
                        Err(Error::UnexpectedShape(EMPTY_RESPONSE.to_string()))
                    } else {
                        Ok(outcome)
                    }
                });
                match res {
                    Ok(outcome) => {
                        let text = outcome.message();
                        toasts.success(text.clone());
                        self.show_inline(Kind::Success, text);
                        return (Task::none(), Some(outcome));
                    }
                    Err(e) => {
                        let mut text = e.to_string();
                        if text.trim().is_empty() {
                            text = DEFAULT_FAILURE.to_string();
                        }
                        warn!("{}: {}", self.title, text);
                        toasts.error(text.clone());
                        self.show_inline(Kind::Error, text);
                    }
                }
            }
            Message::Close => return (self.close(), None),
            Message::FocusNext => return (self.move_focus(true), None),
            Message::FocusPrevious => return (self.move_focus(false), None),
            Message::Tick(now) => {
                if self.inline.as_ref().is_some_and(|i| i.expires_at <= now) {
                    self.hide_inline();
                }
            }
        }
        (Task::none(), None)
    }

    fn submit(&mut self, gateway: &Arc<dyn Gateway>) -> Task<Message<O>> {
        if !self.open || self.submitting {
            return Task::none();
        }
        self.hide_inline();

        let payload = self.form.payload();
        let blank = self.form.required().and_then(|f| {
            let value = payload.get(f.name).map(String::as_str).unwrap_or("");
            value.trim().is_empty().then(|| (f.name, f.id.clone()))
        });
        if let Some((name, id)) = blank {
            self.form.invalidate(name);
            self.show_inline(Kind::Error, BLANK_FIELD);
            self.focused = Some(id.clone());
            return text_input::focus(id);
        }

        self.submitting = true;
        Task::perform((self.submit)(gateway.clone(), payload), Message::Submitted)
    }

    /// Cycles the focus through the visible inputs of the dialog, wrapping
    /// around at both ends.
    fn move_focus(&mut self, forward: bool) -> Task<Message<O>> {
        let ring: Vec<text_input::Id> = self
            .form
            .focus_ring()
            .iter()
            .map(|f| f.id.clone())
            .collect();
        if ring.is_empty() {
            return Task::none();
        }
        let len = ring.len();
        let current = self
            .focused
            .as_ref()
            .and_then(|id| ring.iter().position(|r| r == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        let id = ring[next].clone();
        self.focused = Some(id.clone());
        text_input::focus(id)
    }

    /// Whether Escape and Tab are routed to the dialog.
    pub fn listens_to_keys(&self) -> bool {
        self.open
    }

    /// Keyboard and timer bindings, only alive while the dialog is open.
    pub fn subscription(&self) -> Subscription<Message<O>> {
        if !self.listens_to_keys() {
            return Subscription::none();
        }
        let keys = iced::event::listen_with(key_message::<O>);
        if self.inline.is_some() {
            Subscription::batch(vec![
                keys,
                iced::time::every(Duration::from_secs(1)).map(Message::Tick),
            ])
        } else {
            keys
        }
    }
}

fn key_message<O>(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message<O>> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Close),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Tab),
            modifiers,
            ..
        }) => Some(if modifiers.shift() {
            Message::FocusPrevious
        } else {
            Message::FocusNext
        }),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::app::{
        fake::FakeGateway,
        form::{Choice, Field},
    };

    use iced::keyboard::{key::NativeCode, key::Physical, Location, Modifiers};

    thread_local! {
        static SUBMITTED: Cell<usize> = const { Cell::new(0) };
    }

    fn submitted() -> usize {
        SUBMITTED.with(|c| c.get())
    }

    fn echo(_gateway: Arc<dyn Gateway>, payload: Payload) -> SubmitFuture<String> {
        SUBMITTED.with(|c| c.set(c.get() + 1));
        Box::pin(async move { Ok(payload.get("login").cloned().unwrap_or_default()) })
    }

    const TTL: &[Choice] = &[
        Choice {
            value: "none",
            label: "No expiration",
        },
        Choice {
            value: "custom",
            label: "Custom",
        },
    ];

    fn modal() -> Modal<String> {
        Modal::new(
            "Sign in",
            "Sign in",
            Form::new(
                vec![
                    Field::text("login", "Login"),
                    Field::password("password", "Password"),
                    Field::select("ttl_select", "Time to live", TTL),
                    Field::text("ttl_custom", "Seconds").shown_when("ttl_select", "custom"),
                ],
                "login",
            ),
            echo,
        )
    }

    fn gateway() -> Arc<dyn Gateway> {
        Arc::new(FakeGateway::default())
    }

    fn input(name: &'static str, value: &str) -> Message<String> {
        Message::Input(name, value.to_string())
    }

    fn id_of(modal: &Modal<String>, name: &str) -> text_input::Id {
        modal.form().field(name).unwrap().id.clone()
    }

    #[test]
    fn test_open_resets_form_and_message() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();

        let _ = modal.open(None);
        assert!(modal.is_open());
        assert_eq!(modal.focused(), Some(&id_of(&modal, "login")));

        let _ = modal.update(&gateway, input("login", "alice"), &mut toasts);
        let _ = modal.update(
            &gateway,
            Message::Submitted(Err(Error::InvalidCredentials)),
            &mut toasts,
        );
        assert_eq!(
            modal.inline().map(|i| i.text.as_str()),
            Some("Invalid login or password")
        );

        let _ = modal.close();
        let _ = modal.open(None);
        assert!(modal.inline().is_none());
        assert_eq!(
            modal.form().payload().get("login").map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn test_blank_required_field_is_not_submitted() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        let _ = modal.open(None);

        let _ = modal.update(&gateway, input("password", "passw0rd"), &mut toasts);
        let _ = modal.update(&gateway, input("login", "   "), &mut toasts);
        let _ = modal.update(&gateway, Message::Submit, &mut toasts);

        assert_eq!(submitted(), 0);
        assert!(!modal.is_submitting());
        let inline = modal.inline().unwrap();
        assert_eq!(inline.kind, Kind::Error);
        assert_eq!(inline.text, BLANK_FIELD);
        assert_eq!(modal.focused(), Some(&id_of(&modal, "login")));
        assert!(!modal.form().field("login").unwrap().value.valid);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_single_submission_in_flight() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        let _ = modal.open(None);

        let _ = modal.update(&gateway, input("login", "alice"), &mut toasts);
        let _ = modal.update(&gateway, Message::Submit, &mut toasts);
        assert!(modal.is_submitting());
        let _ = modal.update(&gateway, Message::Submit, &mut toasts);
        assert_eq!(submitted(), 1);

        let (_, outcome) = modal.update(
            &gateway,
            Message::Submitted(Ok("alice".to_string())),
            &mut toasts,
        );
        assert_eq!(outcome.as_deref(), Some("alice"));
        assert!(!modal.is_submitting());
        assert_eq!(modal.inline().map(|i| i.kind), Some(Kind::Success));
        assert_eq!(toasts.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Kind::Success]);

        // The button is enabled again.
        let _ = modal.update(&gateway, Message::Submit, &mut toasts);
        assert_eq!(submitted(), 2);
    }

    #[test]
    fn test_empty_outcome_is_a_failure() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        let _ = modal.open(None);

        let (_, outcome) = modal.update(
            &gateway,
            Message::Submitted(Ok("  ".to_string())),
            &mut toasts,
        );
        assert_eq!(outcome, None);
        let inline = modal.inline().unwrap();
        assert_eq!(inline.kind, Kind::Error);
        assert!(inline.text.contains(EMPTY_RESPONSE));
        assert_eq!(toasts.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Kind::Error]);
    }

    #[test]
    fn test_failure_without_message() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        let _ = modal.open(None);

        let _ = modal.update(
            &gateway,
            Message::Submitted(Err(Error::Validation(String::new()))),
            &mut toasts,
        );
        assert_eq!(modal.inline().map(|i| i.text.as_str()), Some(DEFAULT_FAILURE));
    }

    #[test]
    fn test_focus_ring_wraps() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        let _ = modal.open(None);
        let login = id_of(&modal, "login");
        let password = id_of(&modal, "password");

        let _ = modal.update(&gateway, Message::FocusNext, &mut toasts);
        assert_eq!(modal.focused(), Some(&password));
        let _ = modal.update(&gateway, Message::FocusNext, &mut toasts);
        assert_eq!(modal.focused(), Some(&login));
        let _ = modal.update(&gateway, Message::FocusPrevious, &mut toasts);
        assert_eq!(modal.focused(), Some(&password));

        // Revealing the custom field moves the focus there and adds it to the ring.
        let custom = id_of(&modal, "ttl_custom");
        let _ = modal.update(
            &gateway,
            Message::Select("ttl_select", TTL[1]),
            &mut toasts,
        );
        assert_eq!(modal.focused(), Some(&custom));
        let _ = modal.update(&gateway, Message::FocusNext, &mut toasts);
        assert_eq!(modal.focused(), Some(&login));
        let _ = modal.update(&gateway, Message::FocusPrevious, &mut toasts);
        assert_eq!(modal.focused(), Some(&custom));
    }

    #[test]
    fn test_empty_focus_ring() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal: Modal<String> = Modal::new(
            "Confirm",
            "Ok",
            Form::new(vec![Field::select("ttl_select", "Time to live", TTL)], "none"),
            echo,
        );
        let _ = modal.open(None);
        assert_eq!(modal.focused(), None);
        let _ = modal.update(&gateway, Message::FocusNext, &mut toasts);
        assert_eq!(modal.focused(), None);
    }

    #[test]
    fn test_inline_message_expires() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        let _ = modal.open(None);
        modal.show_inline(Kind::Success, "done");

        let now = Instant::now();
        let _ = modal.update(&gateway, Message::Tick(now), &mut toasts);
        assert!(modal.inline().is_some());
        let _ = modal.update(
            &gateway,
            Message::Tick(now + INLINE_MESSAGE_TIMEOUT + Duration::from_secs(1)),
            &mut toasts,
        );
        assert!(modal.inline().is_none());
    }

    #[test]
    fn test_close_and_reopen() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        for _ in 0..3 {
            let _ = modal.open(None);
            assert!(modal.is_open());
            let _ = modal.update(&gateway, Message::Close, &mut toasts);
            assert!(!modal.is_open());
            assert_eq!(modal.focused(), None);
        }
        // A closed dialog does not submit.
        let _ = modal.update(&gateway, Message::Submit, &mut toasts);
        assert_eq!(submitted(), 0);
    }

    pub(crate) fn key_press(key: Key, modifiers: Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: Physical::Unidentified(NativeCode::Unidentified),
            location: Location::Standard,
            modifiers,
            text: None,
        })
    }

    fn keyed(key: Key, modifiers: Modifiers) -> Option<Message<String>> {
        key_message::<String>(
            key_press(key, modifiers),
            event::Status::Ignored,
            window::Id::unique(),
        )
    }

    #[test]
    fn test_key_bindings() {
        assert!(matches!(
            keyed(Key::Named(Named::Escape), Modifiers::empty()),
            Some(Message::Close)
        ));
        assert!(matches!(
            keyed(Key::Named(Named::Escape), Modifiers::SHIFT),
            Some(Message::Close)
        ));
        assert!(matches!(
            keyed(Key::Named(Named::Tab), Modifiers::empty()),
            Some(Message::FocusNext)
        ));
        assert!(matches!(
            keyed(Key::Named(Named::Tab), Modifiers::SHIFT),
            Some(Message::FocusPrevious)
        ));
        assert!(keyed(Key::Named(Named::Enter), Modifiers::empty()).is_none());
        assert!(keyed(Key::Character("a".into()), Modifiers::empty()).is_none());

        // Key releases are not bindings.
        let release = Event::Keyboard(keyboard::Event::KeyReleased {
            key: Key::Named(Named::Escape),
            location: Location::Standard,
            modifiers: Modifiers::empty(),
        });
        assert!(
            key_message::<String>(release, event::Status::Ignored, window::Id::unique()).is_none()
        );
    }

    #[test]
    fn test_keys_only_routed_while_open() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut modal = modal();
        assert!(!modal.listens_to_keys());
        for _ in 0..3 {
            let _ = modal.open(None);
            assert!(modal.listens_to_keys());
            let _ = modal.update(&gateway, Message::Close, &mut toasts);
            assert!(!modal.listens_to_keys());
        }
    }
}
