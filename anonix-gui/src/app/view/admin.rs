use iced::{widget::Space, Alignment, Length};

use anonix_ui::{
    component::{button, text},
    theme,
    widget::{Column, Container, Element, Row},
};

use super::{grid::grid, modal::layer};
use crate::app::state::admin::{AdminPage, Message};

pub fn admin(page: &AdminPage) -> Element<Message> {
    let bar = Row::new()
        .push(text::h3("Tokens"))
        .push(Space::with_width(Length::Fill))
        .push(button::primary("Tokenize").on_press(Message::OpenTokenize))
        .push(button::secondary("Detokenize").on_press(Message::OpenDetokenize))
        .push(button::transparent("Logout").on_press(Message::Logout))
        .spacing(10)
        .align_y(Alignment::Center);

    let base: Element<Message> = Container::new(
        Column::new()
            .push(bar)
            .push(grid(page.grid(), page.filter_id()).map(Message::Grid))
            .spacing(20),
    )
    .padding(30)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background)
    .into();

    let base = layer(base, page.tokenize(), Message::Tokenize);
    layer(base, page.detokenize(), Message::Detokenize)
}
