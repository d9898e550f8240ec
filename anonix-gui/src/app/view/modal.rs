use iced::{
    widget::{pick_list, Space},
    Alignment, Length,
};

use anonix_ui::{
    component::{button, form, notification, text},
    theme,
    widget::{modal, Column, Container, Element, Row},
};

use crate::app::{
    form::{Field, FieldKind},
    modal::{Message, Modal, Outcome, BLANK_FIELD},
    toast::Kind,
};

/// Draws `base` with the dialog on top of it while the dialog is open.
pub fn layer<'a, M, O>(
    base: Element<'a, M>,
    dialog: &'a Modal<O>,
    map: fn(Message<O>) -> M,
) -> Element<'a, M>
where
    M: Clone + 'a,
    O: Outcome,
{
    if !dialog.is_open() {
        return base;
    }
    modal::Modal::new(base, content(dialog).map(map))
        .on_blur(map(Message::Close))
        .into()
}

pub fn content<O: Outcome>(dialog: &Modal<O>) -> Element<Message<O>> {
    let fields = dialog
        .form()
        .fields()
        .iter()
        .filter(|f| f.visible)
        .fold(Column::new().spacing(15), |col, f| col.push(field::<O>(f)));

    Container::new(
        Column::new()
            .push(modal::header(dialog.title, Message::Close))
            .push(fields)
            .push_maybe(dialog.inline().map(|inline| match inline.kind {
                Kind::Success => notification::success(&inline.text),
                Kind::Error => notification::error(&inline.text),
            }))
            .push(
                Row::new()
                    .push(Space::with_width(Length::Fill))
                    .push(button::secondary("Cancel").on_press(Message::Close))
                    .push(button::primary_busy(
                        dialog.submit_label,
                        "Please wait...",
                        dialog.is_submitting(),
                        Message::Submit,
                    ))
                    .spacing(10)
                    .align_y(Alignment::Center),
            )
            .spacing(20),
    )
    .padding(25)
    .width(Length::Fixed(modal::MODAL_WIDTH as f32))
    .style(theme::card::modal)
    .into()
}

fn field<O: Outcome>(field: &Field) -> Element<Message<O>> {
    let name = field.name;
    match &field.kind {
        FieldKind::Select(choices) => Column::new()
            .push(text::p2_medium(field.label).style(theme::text::secondary))
            .push(
                pick_list(*choices, field.selected(), move |choice| {
                    Message::Select(name, choice)
                })
                .width(Length::Fill)
                .padding(10)
                .style(theme::pick_list::primary),
            )
            .spacing(5)
            .into(),
        kind => {
            let input = form::Form::new(field.placeholder, &field.value, move |value| {
                Message::Input(name, value)
            })
            .label(field.label)
            .id(field.id.clone())
            .on_submit(Message::Submit)
            .warning(BLANK_FIELD);
            if *kind == FieldKind::Password {
                input.secure().into()
            } else {
                input.into()
            }
        }
    }
}
