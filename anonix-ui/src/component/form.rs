use iced::widget::text_input;
use iced::Length;

use crate::{color, component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            valid: true,
        }
    }
}

pub struct Form<'a, Message> {
    label: Option<&'a str>,
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value)
                .on_input(on_change)
                .padding(10),
            warning: None,
            valid: value.valid,
        }
    }

    /// Masks the typed characters.
    pub fn secure(mut self) -> Self {
        self.input = self.input.secure(true);
        self
    }

    /// Sets the widget id, used to move the keyboard focus.
    pub fn id(mut self, id: text_input::Id) -> Self {
        self.input = self.input.id(id);
        self
    }

    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the [`Form`] with a warning message shown while the value is invalid.
    pub fn warning(mut self, warning: &'a str) -> Self {
        self.warning = Some(warning);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(|l| text::p2_medium(l).style(theme::text::secondary)))
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).color(color::RED))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
