/// Plant detail modal
///
/// Drawn over the list with a dimmed backdrop. Clicking the backdrop,
/// the Close button or pressing Escape closes it.
use chrono::Weekday;
use iced::widget::{button, canvas, center, column, container, mouse_area, opaque, row, stack, text};
use iced::alignment::Horizontal;
use iced::{Border, Color, Element, Length};
use std::time::Instant;

use super::moisture_chart::MoistureChart;
use super::{card, color, BOLD, ITALIC, MUTED_TEXT};
use crate::images::ImageCache;
use crate::moisture::day_index;
use crate::state::data::Plant;
use crate::Message;

const MODAL_WIDTH: f32 = 360.0;

/// Draw `base`, with the detail for `plant` on top when `visible`.
/// Nothing is drawn over the base when there is no plant to show.
pub fn plant_modal<'a>(
    base: Element<'a, Message>,
    plant: Option<&'a Plant>,
    visible: bool,
    on_close: Message,
    today: Weekday,
    images: &'a ImageCache,
    now: Instant,
) -> Element<'a, Message> {
    match plant {
        Some(plant) if visible => overlay(
            base,
            detail(plant, today, images, now, on_close.clone()),
            on_close,
        ),
        _ => base,
    }
}

fn overlay<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blank: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.6,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blank)
        )
    ]
    .into()
}

fn detail<'a>(
    plant: &'a Plant,
    today: Weekday,
    images: &'a ImageCache,
    now: Instant,
    on_close: Message,
) -> Element<'a, Message> {
    let reading = plant.moisture.on(today);
    let tier = plant.moisture.tier_on(today);
    let palette = tier.palette();

    let chart = canvas(MoistureChart {
        readings: *plant.moisture.readings(),
        today: day_index(today),
    })
    .width(Length::Fill)
    .height(Length::Fixed(140.0));

    let status = row![
        text(format!("{}%", reading))
            .size(28)
            .font(BOLD)
            .color(color(palette.percentage)),
        text(tier.label()).size(16).color(color(palette.name)),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let mut content = column![card::photo(
        plant,
        images,
        now,
        Length::Fill,
        Length::Fixed(200.0)
    )]
    .spacing(12);

    if images.error(plant.id).is_some() {
        content = content.push(text("Photo unavailable").size(12).color(MUTED_TEXT));
    }

    let content = content
        .push(
            text(&plant.name)
                .size(24)
                .font(BOLD)
                .color(color(palette.name)),
        )
        .push(text("Scientific Name").size(14).font(ITALIC).color(MUTED_TEXT))
        .push(status)
        .push(text(&plant.info).size(14))
        .push(text("This week").size(14).font(BOLD))
        .push(chart)
        .push(
            button(text("Close").width(Length::Fill).align_x(Horizontal::Center))
                .width(Length::Fill)
                .padding(10)
                .on_press(on_close),
        );

    container(content)
        .width(Length::Fixed(MODAL_WIDTH))
        .padding(20)
        .style(|_theme| container::Style {
            background: Some(Color::WHITE.into()),
            border: Border {
                radius: 16.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
