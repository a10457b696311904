/// Weekly moisture bar chart shown in the detail modal
use iced::alignment;
use iced::widget::canvas::{self, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Size};

use super::color;
use crate::moisture::{Tier, DAY_LABELS};
use crate::Message;

/// Height reserved under the bars for day labels
const LABEL_HEIGHT: f32 = 18.0;

#[derive(Debug, Clone)]
pub struct MoistureChart {
    /// Monday-first readings, 0..=100
    pub readings: [u8; 7],
    /// Index of today's bar
    pub today: usize,
}

/// Bar rectangle for slot `index`, in chart coordinates
fn bar_bounds(index: usize, reading: u8, size: Size) -> Rectangle {
    let slot_width = size.width / 7.0;
    let bar_width = slot_width * 0.6;
    let plot_height = (size.height - LABEL_HEIGHT).max(0.0);
    let bar_height = plot_height * f32::from(reading.min(100)) / 100.0;

    Rectangle {
        x: index as f32 * slot_width + (slot_width - bar_width) / 2.0,
        y: plot_height - bar_height,
        width: bar_width,
        height: bar_height,
    }
}

impl canvas::Program<Message> for MoistureChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let plot_height = (size.height - LABEL_HEIGHT).max(0.0);

        // Baseline
        frame.stroke(
            &Path::line(Point::new(0.0, plot_height), Point::new(size.width, plot_height)),
            Stroke::default()
                .with_color(Color::from_rgba(0.0, 0.0, 0.0, 0.15))
                .with_width(1.0),
        );

        for (i, &reading) in self.readings.iter().enumerate() {
            let bar = bar_bounds(i, reading, size);
            let palette = Tier::for_reading(reading).palette();

            frame.fill_rectangle(bar.position(), bar.size(), color(palette.percentage));

            if i == self.today {
                frame.stroke(
                    &Path::rectangle(bar.position(), bar.size()),
                    Stroke::default()
                        .with_color(color(palette.name))
                        .with_width(2.0),
                );
            }

            frame.fill_text(Text {
                content: DAY_LABELS[i].to_string(),
                position: Point::new(bar.center_x(), plot_height + 4.0),
                color: if i == self.today {
                    color(palette.name)
                } else {
                    super::MUTED_TEXT
                },
                size: Pixels(12.0),
                horizontal_alignment: alignment::Horizontal::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
