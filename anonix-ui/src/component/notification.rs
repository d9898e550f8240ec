use crate::{component::text, theme, widget::*};
use iced::Length;

/// Inline confirmation shown inside a dialog.
pub fn success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::notification::success)
}

/// Inline failure shown inside a dialog.
pub fn error<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::notification::error)
}
