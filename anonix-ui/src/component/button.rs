use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::secondary)
}

pub fn alert<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::destructive)
}

pub fn transparent<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::transparent)
}

/// Button whose label is the given text, drawn like a hyperlink.
pub fn link<'a, T: 'a>(label: Text<'a>) -> Button<'a, T> {
    Button::new(label).padding(0).style(theme::button::link)
}

/// Primary button showing `busy_label` and ignoring presses while `busy`.
pub fn primary_busy<'a, T: 'a + Clone>(
    t: &'static str,
    busy_label: &'static str,
    busy: bool,
    on_press: T,
) -> Button<'a, T> {
    if busy {
        primary(busy_label)
    } else {
        primary(t).on_press(on_press)
    }
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .padding([5, 15])
}
