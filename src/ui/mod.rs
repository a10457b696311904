/// View layer
///
/// Everything here turns plain state into iced elements. Colour and
/// layout decisions live in `moisture.rs` and `list.rs` so they can be
/// tested without a renderer.
use iced::font::{Style, Weight};
use iced::gradient::Linear;
use iced::{Background, Color, Font, Gradient, Radians};
use std::f32::consts::FRAC_PI_2;

use crate::moisture::{Rgb, TierPalette};

pub mod card;
pub mod header;
pub mod home;
pub mod list;
pub mod modal;
pub mod moisture_chart;

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const ITALIC: Font = Font {
    style: Style::Italic,
    ..Font::DEFAULT
};

/// Screen background
pub const SCREEN_BACKGROUND: Color = Color {
    r: 0.976,
    g: 0.980,
    b: 0.984,
    a: 1.0,
};
/// Grey used for secondary labels
pub const MUTED_TEXT: Color = Color {
    r: 0.420,
    g: 0.447,
    b: 0.502,
    a: 1.0,
};

pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}

/// Left-to-right gradient for a tier's card background
pub fn tier_background(palette: &TierPalette) -> Background {
    let [start, end] = palette.gradient;
    Background::Gradient(Gradient::Linear(
        Linear::new(Radians(FRAC_PI_2))
            .add_stop(0.0, color(start))
            .add_stop(1.0, color(end)),
    ))
}
