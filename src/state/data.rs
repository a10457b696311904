/// Shared data structures for the application state
///
/// These structs represent the plant records the screen is built from.
use chrono::Weekday;

use crate::moisture::{day_index, Tier};

pub type PlantId = u32;

/// Seven daily moisture percentages, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoistureWeek(pub [u8; 7]);

impl MoistureWeek {
    /// Reading for the given day of the week
    pub fn on(&self, weekday: Weekday) -> u8 {
        self.0[day_index(weekday)]
    }

    pub fn tier_on(&self, weekday: Weekday) -> Tier {
        Tier::for_reading(self.on(weekday))
    }

    pub fn readings(&self) -> &[u8; 7] {
        &self.0
    }
}

/// Coarse status tag attached to each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Low,
    Medium,
    Ok,
}

/// A single plant in the list
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    /// Unique within the plant set
    pub id: PlantId,
    pub name: String,
    /// Photo URI
    pub image: String,
    pub info: String,
    pub moisture: MoistureWeek,
    /// Not read by any rendering or filtering logic.
    #[allow(dead_code)]
    pub current_status: StatusTag,
}

const MONSTERA_INFO: &str = "Monstera deliciosa, commonly known as the Swiss cheese plant, \
is famous for its natural leaf holes. It prefers bright, indirect sunlight and moderate watering.";

/// The fixed plant set shown on screen
pub fn sample_plants() -> Vec<Plant> {
    let plant = |id, name: &str, image: &str, moisture, current_status| Plant {
        id,
        name: name.to_string(),
        image: image.to_string(),
        info: MONSTERA_INFO.to_string(),
        moisture: MoistureWeek(moisture),
        current_status,
    };

    vec![
        plant(
            1,
            "Monstera",
            "https://plus.unsplash.com/premium_photo-1672998159540-0a3f849fe3c6?fm=jpg&q=60&w=3000&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MXx8Z3JlZW4lMjBwbGFudHxlbnwwfHwwfHx8MA%3D%3D",
            [62, 60, 55, 70, 68, 62, 45],
            StatusTag::Low,
        ),
        plant(
            2,
            "Mycilea",
            "https://plus.unsplash.com/premium_photo-1668096747185-624626b732f4?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MjF8fGdyZWVuJTIwcGxhbnQlMjBwb3R0ZWR8ZW58MHx8MHx8fDA%3D",
            [35, 60, 55, 10, 68, 62, 29],
            StatusTag::Ok,
        ),
        plant(
            3,
            "Paraphelia",
            "https://images.unsplash.com/photo-1515542647469-5f9a6b25ef5b?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
            [15, 20, 20, 70, 48, 62, 31],
            StatusTag::Medium,
        ),
        plant(
            4,
            "Raphis",
            "placeholder-url-1",
            [25, 60, 33, 70, 68, 62, 58],
            StatusTag::Low,
        ),
    ]
}
