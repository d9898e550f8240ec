use iced::{alignment::Vertical, widget::Space, Alignment, Length};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

pub const ELLIPSIS: char = '…';

/// Cuts `value` to at most `max` characters, ending with an ellipsis when
/// something was removed.
pub fn ellipsize(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(max - 1).collect();
    out.push(ELLIPSIS);
    out
}

pub fn header<'a, T: 'a>(columns: &[(&'static str, Length)]) -> Container<'a, T> {
    Container::new(
        columns
            .iter()
            .fold(Row::new().spacing(10), |row, (label, width)| {
                row.push(
                    Container::new(text::p2_medium(*label))
                        .width(*width)
                        .align_y(Vertical::Center),
                )
            })
            .align_y(Alignment::Center),
    )
    .padding([8, 10])
    .width(Length::Fill)
    .style(theme::table::header)
}

pub fn row<'a, T: 'a>(cells: Vec<(Element<'a, T>, Length)>, index: usize) -> Container<'a, T> {
    Container::new(
        cells
            .into_iter()
            .fold(Row::new().spacing(10), |row, (cell, width)| {
                row.push(Container::new(cell).width(width).align_y(Vertical::Center))
            })
            .align_y(Alignment::Center),
    )
    .padding([6, 10])
    .width(Length::Fill)
    .style(if index % 2 == 0 {
        theme::table::row
    } else {
        theme::table::row_alt
    })
}

/// Footer with the page position and the previous/next controls.
pub fn pager<'a, T: 'a + Clone>(
    page: usize,
    pages: usize,
    total: usize,
    on_previous: T,
    on_next: T,
) -> Row<'a, T> {
    Row::new()
        .push(text::p2_regular(format!("{} rows", total)).style(theme::text::secondary))
        .push(Space::with_width(Length::Fill))
        .push(button::secondary("<").on_press_maybe((page > 0).then_some(on_previous)))
        .push(text::p2_regular(format!("Page {} of {}", page + 1, pages.max(1))))
        .push(button::secondary(">").on_press_maybe((page + 1 < pages).then_some(on_next)))
        .spacing(10)
        .align_y(Alignment::Center)
}
