use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{
    palette::{TextInput, TextInputPalette},
    Theme,
};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.primary, status, theme)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.invalid, status, theme)
}

fn style(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: p
            .border
            .map(|color| Border {
                radius: 8.0.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}

fn text_input(c: &TextInput, status: Status, theme: &Theme) -> Style {
    match status {
        Status::Active | Status::Hovered => style(&c.active),
        // The focused field is outlined with the accent color so keyboard
        // navigation stays visible.
        Status::Focused => {
            let active = style(&c.active);
            Style {
                border: Border {
                    color: theme.colors.buttons.primary.active.background,
                    ..active.border
                },
                ..active
            }
        }
        Status::Disabled => style(&c.disabled),
    }
}
