use chrono::Weekday;
use iced::widget::{button, column, container, image, row, text, Stack};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Padding, Shadow, Vector};
use std::time::Instant;

use super::{color, list::CARD_HEIGHT, tier_background, BOLD, ITALIC, MUTED_TEXT};
use crate::images::ImageCache;
use crate::state::data::Plant;
use crate::Message;

const PHOTO_SIZE: f32 = 60.0;

/// Placeholder with the photo cross-fading over it once it has arrived
pub fn photo<'a>(
    plant: &Plant,
    images: &'a ImageCache,
    now: Instant,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let placeholder = image(images.placeholder().clone())
        .width(width)
        .height(height)
        .content_fit(ContentFit::Cover);

    let mut layers = Stack::new().push(placeholder);
    if let Some((handle, opacity)) = images.photo(plant.id, now) {
        layers = layers.push(
            image(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Cover)
                .opacity(opacity),
        );
    }
    layers.into()
}

/// One plant card, coloured by today's moisture tier
pub fn view<'a>(
    plant: &'a Plant,
    today: Weekday,
    images: &'a ImageCache,
    now: Instant,
) -> Element<'a, Message> {
    let reading = plant.moisture.on(today);
    let palette = plant.moisture.tier_on(today).palette();

    let names = column![
        text(&plant.name)
            .size(20)
            .font(BOLD)
            .color(color(palette.name)),
        text("Scientific Name").size(14).font(ITALIC).color(MUTED_TEXT),
    ]
    .spacing(2);

    let content = row![
        photo(
            plant,
            images,
            now,
            Length::Fixed(PHOTO_SIZE),
            Length::Fixed(PHOTO_SIZE)
        ),
        container(names).width(Length::Fill).center_y(Length::Fill),
        text(reading.to_string())
            .size(24)
            .font(BOLD)
            .color(color(palette.percentage)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let card = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(Padding {
            top: 16.0,
            right: 25.0,
            bottom: 16.0,
            left: 16.0,
        })
        .style(move |_theme| container::Style {
            background: Some(tier_background(&palette)),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            ..container::Style::default()
        });

    button(card)
        .padding(0)
        .style(|_theme, _status| button::Style::default())
        .on_press(Message::PlantPressed(plant.id))
        .into()
}
