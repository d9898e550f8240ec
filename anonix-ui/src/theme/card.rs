use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: palette
            .border
            .map(|color| Border {
                radius: 12.0.into(),
                width: 1.0,
                color,
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}

pub fn modal(theme: &Theme) -> Style {
    card(&theme.colors.cards.modal)
}
