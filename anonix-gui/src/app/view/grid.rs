use iced::{
    widget::{pick_list, scrollable, text_input, Space},
    Alignment, Length,
};

use anonix_ui::{
    component::{
        button, notification,
        table::{self, ellipsize},
        text,
    },
    theme,
    widget::{modal, Column, Container, Element, Row, TextInput},
};

use crate::{
    app::grid::{MappingsGrid, Message, PageSize},
    convert::format_local,
    services::gateway::Mapping,
};

const CELL_CHARS: usize = 24;

fn columns() -> [(&'static str, Length); 6] {
    [
        ("Token", Length::FillPortion(3)),
        ("Cipher text", Length::FillPortion(3)),
        ("Wrapped key", Length::FillPortion(3)),
        ("Time to live", Length::FillPortion(2)),
        ("Created at", Length::FillPortion(2)),
        ("", Length::Fixed(90.0)),
    ]
}

pub fn grid<'a>(grid: &'a MappingsGrid, filter_id: &text_input::Id) -> Element<'a, Message> {
    let toolbar = Row::new()
        .push(
            TextInput::new("Filter", grid.filter())
                .id(filter_id.clone())
                .on_input(Message::Filter)
                .padding(10)
                .width(Length::Fill),
        )
        .push(
            pick_list(PageSize::ALL, Some(grid.page_size()), Message::PageSize)
                .padding(10)
                .style(theme::pick_list::primary),
        )
        .push(button::primary_busy(
            "Refresh",
            "Loading...",
            grid.is_loading(),
            Message::Refresh,
        ))
        .spacing(10)
        .align_y(Alignment::Center);

    let widths = columns();
    let visible = grid.visible();
    let body: Element<Message> = if visible.is_empty() {
        Container::new(text::p1_regular("No tokens").style(theme::text::secondary))
            .padding(20)
            .center_x(Length::Fill)
            .into()
    } else {
        scrollable(
            visible
                .into_iter()
                .enumerate()
                .fold(Column::new(), |col, (i, mapping)| {
                    col.push(row(mapping, grid.is_deleting(&mapping.id), &widths, i))
                }),
        )
        .style(theme::scrollable::primary)
        .height(Length::Fill)
        .into()
    };

    let content = Column::new()
        .push(toolbar)
        .push_maybe(grid.error().map(notification::error))
        .push(
            Column::new()
                .push(table::header(&widths))
                .push(body)
                .height(Length::Fill),
        )
        .push(table::pager(
            grid.page(),
            grid.pages(),
            grid.filtered().len(),
            Message::PreviousPage,
            Message::NextPage,
        ))
        .spacing(15);

    match grid.confirming() {
        Some(id) => modal::Modal::new(content, confirm_delete(id))
            .on_blur(Message::CancelDelete)
            .into(),
        None => content.into(),
    }
}

fn row<'a>(
    mapping: &'a Mapping,
    deleting: bool,
    widths: &[(&'static str, Length); 6],
    index: usize,
) -> Container<'a, Message> {
    let created_at = mapping
        .created_at
        .as_ref()
        .map(format_local)
        .unwrap_or_default();
    let cells: Vec<Element<Message>> = vec![
        button::link(text::mono(ellipsize(&mapping.id, CELL_CHARS)))
            .on_press(Message::CopyToken(mapping.id.clone()))
            .into(),
        text::mono(ellipsize(&mapping.cipher_text, CELL_CHARS)).into(),
        text::mono(ellipsize(&mapping.wrapped_key, CELL_CHARS)).into(),
        text::p2_regular(&mapping.ttl).into(),
        text::p2_regular(created_at).into(),
        button::alert(if deleting { "Deleting" } else { "Delete" })
            .on_press_maybe((!deleting).then(|| Message::RequestDelete(mapping.id.clone())))
            .into(),
    ];
    table::row(
        cells
            .into_iter()
            .zip(widths.iter().map(|(_, width)| *width))
            .collect(),
        index,
    )
}

fn confirm_delete(id: &str) -> Element<Message> {
    Container::new(
        Column::new()
            .push(modal::header("Delete token", Message::CancelDelete))
            .push(text::p1_regular(format!(
                "The token {} will be deleted. This cannot be undone.",
                id
            )))
            .push(
                Row::new()
                    .push(Space::with_width(Length::Fill))
                    .push(button::secondary("Cancel").on_press(Message::CancelDelete))
                    .push(button::alert("Delete").on_press(Message::ConfirmDelete))
                    .spacing(10),
            )
            .spacing(20),
    )
    .padding(25)
    .width(Length::Fixed(modal::MODAL_WIDTH as f32))
    .style(theme::card::modal)
    .into()
}
