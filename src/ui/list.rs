/// Virtualized plant list
///
/// Only cards that intersect the scroll viewport (plus a small overscan)
/// are built. Spacers of exact height stand in for the rest so the
/// scrollable keeps the geometry of the full list.
use chrono::Weekday;
use iced::widget::{column, container, keyed_column, scrollable, text, Space};
use iced::{Element, Length, Padding};
use std::ops::Range;
use std::time::Instant;

use super::card;
use crate::images::ImageCache;
use crate::state::data::{Plant, PlantId};
use crate::Message;

/// Height of one card: 60px photo plus 16px padding above and below
pub const CARD_HEIGHT: f32 = 92.0;
pub const CARD_SPACING: f32 = 12.0;
/// Extra cards built on each side of the viewport
pub const OVERSCAN: usize = 2;
const BOTTOM_PADDING: f32 = 20.0;

/// Scroll position and visible height of the list, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListViewport {
    pub offset: f32,
    pub height: f32,
}

impl Default for ListViewport {
    /// Before the first scroll event the real height is unknown;
    /// assume a tall window so the first screenful is built.
    fn default() -> Self {
        Self {
            offset: 0.0,
            height: 900.0,
        }
    }
}

impl ListViewport {
    pub fn from_scroll(viewport: &scrollable::Viewport) -> Self {
        Self {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        }
    }
}

/// Indices of the cards that should be built for `viewport`.
/// The offset is clamped to the content, since the last scroll event
/// may predate a filter that shortened the list.
pub fn visible_range(viewport: ListViewport, count: usize) -> Range<usize> {
    let stride = CARD_HEIGHT + CARD_SPACING;
    let height = viewport.height.max(0.0);
    let max_top = (spacer_height(count) - height).max(0.0);
    let top = viewport.offset.clamp(0.0, max_top);
    let bottom = top + height;

    let first = (top / stride).floor() as usize;
    let last = (bottom / stride).ceil() as usize;

    let start = first.saturating_sub(OVERSCAN).min(count);
    let end = last.saturating_add(OVERSCAN).min(count);
    start..end.max(start)
}

/// Height of the spacer standing in for `cards` skipped cards
fn spacer_height(cards: usize) -> f32 {
    cards as f32 * (CARD_HEIGHT + CARD_SPACING)
}

/// Keys of the cards built for `viewport`, in list order
pub fn card_ids(plants: &[&Plant], viewport: ListViewport) -> Vec<PlantId> {
    plants[visible_range(viewport, plants.len())]
        .iter()
        .map(|plant| plant.id)
        .collect()
}

pub fn view<'a>(
    plants: &[&'a Plant],
    today: Weekday,
    images: &'a ImageCache,
    now: Instant,
    viewport: ListViewport,
) -> Element<'a, Message> {
    if plants.is_empty() {
        return container(text("No plants match your search.").size(16).color(super::MUTED_TEXT))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(24)
            .into();
    }

    let range = visible_range(viewport, plants.len());
    let before = range.start;
    let after = plants.len() - range.end;

    let ids = card_ids(plants, viewport);
    let cards = keyed_column(
        ids.into_iter()
            .zip(&plants[range])
            .map(|(id, &plant)| (id, card::view(plant, today, images, now))),
    )
    .spacing(CARD_SPACING);

    let content = column![
        Space::with_height(Length::Fixed(spacer_height(before))),
        cards,
        Space::with_height(Length::Fixed(spacer_height(after))),
    ]
    .padding(Padding {
        bottom: BOTTOM_PADDING,
        ..Padding::ZERO
    });

    scrollable(content)
        .on_scroll(Message::ListScrolled)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;
    use crate::state::data::{sample_plants, MoistureWeek};

    fn viewport(offset: f32, height: f32) -> ListViewport {
        ListViewport { offset, height }
    }

    #[test]
    fn test_short_list_is_fully_built() {
        assert_eq!(visible_range(ListViewport::default(), 4), 0..4);
    }

    #[test]
    fn test_top_of_long_list() {
        // 300px shows rows 0..3, plus two rows overscan below
        assert_eq!(visible_range(viewport(0.0, 300.0), 100), 0..5);
    }

    #[test]
    fn test_middle_of_long_list() {
        // stride 104: offset 1040 starts at row 10, 208px ends at row 12
        assert_eq!(visible_range(viewport(1040.0, 208.0), 100), 8..14);
    }

    #[test]
    fn test_bottom_is_clamped() {
        assert_eq!(visible_range(viewport(10_000.0, 400.0), 100), 94..100);
    }

    #[test]
    fn test_stale_offset_is_clamped_to_content() {
        assert_eq!(visible_range(viewport(10_000.0, 400.0), 4), 0..4);
    }

    #[test]
    fn test_narrowed_filter_after_deep_scroll_still_builds_cards() {
        let mut plants = Vec::new();
        for id in 1..=30 {
            let mut plant = sample_plants().remove(0);
            plant.id = id;
            plant.name = if id % 8 == 0 { format!("Raphis {}", id) } else { format!("Fern {}", id) };
            plant.moisture = MoistureWeek([50; 7]);
            plants.push(plant);
        }
        let catalog = Catalog::from_plants(plants);
        let scrolled = viewport(2400.0, 100.0);

        let all = catalog.filter("");
        assert!(!card_ids(&all, scrolled).is_empty());

        let narrowed = catalog.filter("raphis");
        assert_eq!(narrowed.len(), 3);
        assert_eq!(card_ids(&narrowed, scrolled), vec![8, 16, 24]);
    }

    #[test]
    fn test_card_ids_follow_filter_order() {
        let catalog = Catalog::new();
        for query in ["", "ph", "cactus"] {
            let filtered = catalog.filter(query);
            let expected: Vec<PlantId> = filtered.iter().map(|plant| plant.id).collect();
            assert_eq!(card_ids(&filtered, ListViewport::default()), expected);
        }
        assert_eq!(card_ids(&catalog.filter("ph"), ListViewport::default()), vec![3, 4]);
        assert!(card_ids(&catalog.filter("cactus"), ListViewport::default()).is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(visible_range(ListViewport::default(), 0), 0..0);
    }

    #[test]
    fn test_spacers_cover_skipped_cards() {
        let count = 100;
        let range = visible_range(viewport(1040.0, 208.0), count);
        let built = range.len() as f32 * (CARD_HEIGHT + CARD_SPACING);
        let total = spacer_height(range.start) + built + spacer_height(count - range.end);
        assert_eq!(total, spacer_height(count));
    }
}
