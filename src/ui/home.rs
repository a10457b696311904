use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use super::{BOLD, MUTED_TEXT};
use crate::Message;

/// Landing view, the root of the route history
pub fn view(plant_count: usize) -> Element<'static, Message> {
    let content = column![
        text("botaniQ").size(48).font(BOLD),
        text(format!("{} plants in your collection", plant_count))
            .size(16)
            .color(MUTED_TEXT),
        button("Show all plants")
            .on_press(Message::OpenPlants)
            .padding(10),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
