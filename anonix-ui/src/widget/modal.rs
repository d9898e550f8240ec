use iced::{
    alignment::Vertical,
    widget::{center, mouse_area, opaque, stack},
    Length,
};

use crate::{
    component::{button, text},
    theme,
};

use super::{Element, Row, Space};

pub const MODAL_WIDTH: u16 = 550;

/// Draws `content` centered above `base` on a dimmed backdrop.
///
/// The backdrop swallows every pointer event aimed at `base`; a press on it
/// emits the `on_blur` message if one is set.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message: Clone + 'a> Modal<'a, Message> {
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            content: content.into(),
            on_blur: None,
        }
    }

    pub fn on_blur(mut self, message: Message) -> Self {
        self.on_blur = Some(message);
        self
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Self {
        let backdrop = mouse_area(center(opaque(modal.content)).style(theme::container::backdrop));
        let backdrop = match modal.on_blur {
            Some(message) => backdrop.on_press(message),
            None => backdrop,
        };
        stack![modal.base, opaque(backdrop)].into()
    }
}

pub fn header<'a, Message: Clone + 'a>(label: &'a str, close: Message) -> Element<'a, Message> {
    Row::new()
        .push(text::h4_bold(label))
        .push(Space::with_width(Length::Fill))
        .push(button::transparent("×").on_press(close))
        .align_y(Vertical::Center)
        .into()
}
