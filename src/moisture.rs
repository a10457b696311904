/// Moisture tiers and their colour palette
///
/// A single daily reading is mapped through fixed thresholds to one of three
/// tiers. Each tier picks the card's background gradient, the plant name
/// colour and the percentage colour. Everything here is plain data so it can
/// be tested without a renderer.
use chrono::Weekday;

/// Readings below this are red
pub const RED_BELOW: u8 = 30;
/// Readings below this (and not red) are amber
pub const AMBER_BELOW: u8 = 50;

/// An sRGB colour, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used to draw a card for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPalette {
    /// Horizontal background gradient, left then right
    pub gradient: [Rgb; 2],
    pub name: Rgb,
    pub percentage: Rgb,
}

/// Severity band of a moisture reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Red,
    Amber,
    Emerald,
}

impl Tier {
    pub fn for_reading(reading: u8) -> Self {
        if reading < RED_BELOW {
            Tier::Red
        } else if reading < AMBER_BELOW {
            Tier::Amber
        } else {
            Tier::Emerald
        }
    }

    pub fn palette(self) -> TierPalette {
        match self {
            // Subtle rose background, dark red name, bright red percentage
            Tier::Red => TierPalette {
                gradient: [Rgb(0xFE, 0xF2, 0xF2), Rgb(0xFE, 0xE2, 0xE2)],
                name: Rgb(0x99, 0x1B, 0x1B),
                percentage: Rgb(0xDC, 0x26, 0x26),
            },
            Tier::Amber => TierPalette {
                gradient: [Rgb(0xFF, 0xFB, 0xEB), Rgb(0xFE, 0xF3, 0xC7)],
                name: Rgb(0x92, 0x40, 0x0E),
                percentage: Rgb(0xD9, 0x77, 0x06),
            },
            Tier::Emerald => TierPalette {
                gradient: [Rgb(0xF0, 0xFD, 0xF4), Rgb(0xDC, 0xFC, 0xE7)],
                name: Rgb(0x16, 0x65, 0x34),
                percentage: Rgb(0x05, 0x96, 0x69),
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Red => "Needs water",
            Tier::Amber => "Getting dry",
            Tier::Emerald => "Healthy",
        }
    }
}

/// Index into a Monday-first week. Sunday is the last slot.
pub fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

/// Short labels for a Monday-first week
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[cfg(test)]
mod tests {
    use super::*;

    impl Rgb {
        fn from_hex(hex: &str) -> Option<Self> {
            let digits = hex.strip_prefix('#')?;
            if digits.len() != 6 {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
            Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::for_reading(29), Tier::Red);
        assert_eq!(Tier::for_reading(45), Tier::Amber);
        assert_eq!(Tier::for_reading(70), Tier::Emerald);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_reading(0), Tier::Red);
        assert_eq!(Tier::for_reading(30), Tier::Amber);
        assert_eq!(Tier::for_reading(49), Tier::Amber);
        assert_eq!(Tier::for_reading(50), Tier::Emerald);
        assert_eq!(Tier::for_reading(100), Tier::Emerald);
    }

    #[test]
    fn test_palette_matches_hex_values() {
        let red = Tier::Red.palette();
        assert_eq!(red.gradient[0], Rgb::from_hex("#FEF2F2").unwrap());
        assert_eq!(red.gradient[1], Rgb::from_hex("#FEE2E2").unwrap());
        assert_eq!(red.name, Rgb::from_hex("#991B1B").unwrap());
        assert_eq!(red.percentage, Rgb::from_hex("#DC2626").unwrap());

        let amber = Tier::Amber.palette();
        assert_eq!(amber.gradient, [Rgb::from_hex("#FFFBEB").unwrap(), Rgb::from_hex("#FEF3C7").unwrap()]);
        assert_eq!(amber.name, Rgb::from_hex("#92400E").unwrap());
        assert_eq!(amber.percentage, Rgb::from_hex("#D97706").unwrap());

        let emerald = Tier::Emerald.palette();
        assert_eq!(emerald.gradient, [Rgb::from_hex("#F0FDF4").unwrap(), Rgb::from_hex("#DCFCE7").unwrap()]);
        assert_eq!(emerald.name, Rgb::from_hex("#166534").unwrap());
        assert_eq!(emerald.percentage, Rgb::from_hex("#059669").unwrap());
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Rgb::from_hex("FEF2F2"), None);
        assert_eq!(Rgb::from_hex("#FEF2F"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_day_index_is_monday_first() {
        assert_eq!(day_index(Weekday::Mon), 0);
        assert_eq!(day_index(Weekday::Sat), 5);
        assert_eq!(day_index(Weekday::Sun), 6);
    }
}
