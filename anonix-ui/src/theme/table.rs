use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn cell(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border::default(),
        ..Default::default()
    }
}

pub fn header(theme: &Theme) -> Style {
    Style {
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..cell(&theme.colors.table.header)
    }
}

pub fn row(theme: &Theme) -> Style {
    cell(&theme.colors.table.row)
}

pub fn row_alt(theme: &Theme) -> Style {
    cell(&theme.colors.table.row_alt)
}
