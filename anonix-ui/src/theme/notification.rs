use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn notification(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: palette
            .border
            .map(|color| Border {
                width: 1.0,
                color,
                radius: 8.0.into(),
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}

pub fn success(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.success)
}

pub fn error(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.error)
}
