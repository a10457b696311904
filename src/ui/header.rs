use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Back button and search bar
pub fn view(query: &str) -> Element<'_, Message> {
    row![
        button(text("←").size(24))
            .padding(8)
            .style(button::text)
            .on_press(Message::Back),
        text_input("Search plants...", query)
            .on_input(Message::QueryChanged)
            .padding(12)
            .size(16)
            .width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
