use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub table: Table,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub backdrop: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Table {
    pub header: ContainerPalette,
    pub row: ContainerPalette,
    pub row_alt: ContainerPalette,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                foreground: color::GREY_6,
                backdrop: color::BACKDROP,
                scrollable: color::GREY_7,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TEAL_DARK,
                        text: color::WHITE,
                        border: color::TEAL.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TEAL_DARK,
                        text: color::WHITE,
                        border: color::TEAL.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::GREY_2,
                        border: color::GREY_4.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_6,
                        text: color::TEAL,
                        border: color::TEAL.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::TEAL,
                        border: color::TEAL.into(),
                    }),
                    disabled: None,
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::RED,
                        border: color::RED.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: color::RED.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: color::RED.into(),
                    }),
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::TEAL,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: Some(color::GREY_7),
                },
                modal: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: None,
                    border: color::GREY_7.into(),
                },
                error: ContainerPalette {
                    background: color::RED_DARK,
                    text: color::WHITE.into(),
                    border: color::RED.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN_DARK,
                    text: color::WHITE.into(),
                    border: Some(color::GREEN),
                },
                error: ContainerPalette {
                    background: color::RED_DARK,
                    text: color::WHITE.into(),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TEAL_DARK,
                        border: Some(color::GREY_7),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TEAL_DARK,
                        border: Some(color::GREY_5),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TEAL_DARK,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TEAL_DARK,
                        border: Some(color::RED),
                    },
                },
            },
            table: Table {
                header: ContainerPalette {
                    background: color::GREY_5,
                    text: color::GREY_2.into(),
                    border: None,
                },
                row: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: None,
                },
                row_alt: ContainerPalette {
                    background: color::LIGHT_BLACK,
                    text: None,
                    border: None,
                },
            },
        }
    }
}
