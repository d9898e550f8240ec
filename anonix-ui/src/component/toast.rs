use iced::{
    alignment::{Horizontal, Vertical},
    widget::Space,
    Alignment, Length,
};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

pub const TOAST_WIDTH: u16 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

/// A single toast card with its close button.
///
/// The body is rendered as plain text: whatever the server or the user sent
/// is never interpreted.
pub fn toast<'a, T: 'a + Clone>(kind: Kind, body: &'a str, on_close: T) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(
                Container::new(text::p2_regular(body))
                    .width(Length::Fill)
                    .align_y(Vertical::Center),
            )
            .push(button::transparent("×").on_press(on_close))
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding(10)
    .width(Length::Fixed(TOAST_WIDTH as f32))
    .style(match kind {
        Kind::Success => theme::notification::success,
        Kind::Error => theme::notification::error,
    })
}

/// Stacks the toasts in the top right corner of the window, newest last.
pub fn stack<'a, T: 'a + Clone>(toasts: Vec<Container<'a, T>>) -> Element<'a, T> {
    if toasts.is_empty() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }
    Container::new(
        toasts
            .into_iter()
            .fold(Column::new().spacing(10), |col, t| col.push(t)),
    )
    .padding(20)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top)
    .into()
}
