pub use iced::widget::overlay::menu::Catalog;
use iced::{
    widget::overlay::menu::{Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>) -> Style {
        class(self)
    }
}

/// Dropdown of the pick lists (page size, time to live).
pub fn primary(theme: &Theme) -> Style {
    Style {
        text_color: theme.colors.text.primary,
        background: theme.colors.cards.simple.background.into(),
        selected_text_color: theme.colors.buttons.secondary.hovered.text,
        selected_background: theme
            .colors
            .buttons
            .secondary
            .pressed
            .map(|p| p.background)
            .unwrap_or(theme.colors.buttons.secondary.hovered.background)
            .into(),
        border: theme
            .colors
            .cards
            .simple
            .border
            .map(|color| Border {
                radius: 8.0.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
    }
}
