use iced::{
    widget::{center, Space},
    Alignment, Length,
};

use anonix_ui::{
    component::{button, text},
    theme,
    widget::{Column, Container, Element, Row},
};

use super::modal::layer;
use crate::app::state::login::{LoginPage, Message};

pub fn login(page: &LoginPage) -> Element<Message> {
    let card = Container::new(
        Column::new()
            .push(text::h1("Anonix"))
            .push(text::p1_regular("Tokenization gateway console").style(theme::text::secondary))
            .push(Space::with_height(Length::Fixed(20.0)))
            .push(
                Row::new()
                    .push(
                        button::primary("Sign in")
                            .on_press(Message::OpenSignIn)
                            .width(Length::Fill),
                    )
                    .push(
                        button::secondary("Sign up")
                            .on_press(Message::OpenSignUp)
                            .width(Length::Fill),
                    )
                    .spacing(10),
            )
            .spacing(10)
            .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fixed(420.0))
    .style(theme::card::simple);

    let base: Element<Message> = center(card).style(theme::container::background).into();
    let base = layer(base, page.sign_in(), Message::SignIn);
    layer(base, page.sign_up(), Message::SignUp)
}
