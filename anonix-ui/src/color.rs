use iced::Color;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x27 as f32 / 255.0,
    0x27 as f32 / 255.0,
    0x27 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const TEAL: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0xB5 as f32 / 255.0,
    0xA8 as f32 / 255.0,
);
pub const TEAL_DARK: Color = Color::from_rgb(
    0x12 as f32 / 255.0,
    0x5E as f32 / 255.0,
    0x58 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4B as f32 / 255.0,
    0x4B as f32 / 255.0,
);
pub const RED_DARK: Color = Color::from_rgb(
    0x4A as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x1A as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x3D as f32 / 255.0,
    0xC9 as f32 / 255.0,
    0x6B as f32 / 255.0,
);
pub const GREEN_DARK: Color = Color::from_rgb(
    0x15 as f32 / 255.0,
    0x3D as f32 / 255.0,
    0x23 as f32 / 255.0,
);
pub const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.8,
};
