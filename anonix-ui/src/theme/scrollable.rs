use iced::widget::container;
use iced::widget::scrollable::{Catalog, Rail, Scroller, Status, Style, StyleFn};
use iced::{Background, Border};

use super::Theme;

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
    let scroller = match status {
        Status::Active => theme.colors.general.scrollable,
        Status::Hovered { .. } | Status::Dragged { .. } => theme.colors.text.secondary,
    };
    let rail = Rail {
        background: None,
        border: Border::default(),
        scroller: Scroller {
            color: scroller,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };
    Style {
        container: container::Style {
            background: Some(Background::Color(iced::Color::TRANSPARENT)),
            ..Default::default()
        },
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
    }
}
