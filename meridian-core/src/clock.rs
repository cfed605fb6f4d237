//! Wall clock and time label formatting
//!
//! The face always shows UTC. Hours and minutes are derived from Unix
//! seconds so the host only has to supply an epoch counter.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds per minute
const SECS_PER_MINUTE: u64 = 60;

/// Seconds per hour
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Seconds per day
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Capacity of the time label ("23:59")
pub const TIME_LABEL_LEN: usize = 8;

/// Rendered time label
pub type TimeLabel = String<TIME_LABEL_LEN>;

/// Hour display convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// 01-12, zero padded, no AM/PM marker
    #[cfg_attr(feature = "serde", serde(rename = "12h"))]
    TwelveHour,
    /// 00-23, zero padded
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    TwentyFourHour,
}

impl ClockStyle {
    /// Parse a config value ("12h" or "24h")
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "12h" => Some(ClockStyle::TwelveHour),
            "24h" => Some(ClockStyle::TwentyFourHour),
            _ => None,
        }
    }

    /// Hour as displayed in this style
    pub fn display_hour(self, hour: u8) -> u8 {
        match self {
            ClockStyle::TwentyFourHour => hour,
            ClockStyle::TwelveHour => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// UTC time of day at minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    hour: u8,
    minute: u8,
}

impl WallClock {
    /// Create a wall clock, returning `None` for an invalid time
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Time of day for a Unix timestamp
    pub const fn from_unix_seconds(secs: u64) -> Self {
        let of_day = secs % SECS_PER_DAY;
        Self {
            hour: (of_day / SECS_PER_HOUR) as u8,
            minute: ((of_day % SECS_PER_HOUR) / SECS_PER_MINUTE) as u8,
        }
    }

    /// Hour (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0-59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Render as "HH:MM" in the given style
    pub fn format(&self, style: ClockStyle) -> TimeLabel {
        let mut label = TimeLabel::new();
        // "HH:MM" always fits
        let _ = write!(label, "{:02}:{:02}", style.display_hour(self.hour), self.minute);
        label
    }
}

/// Seconds until the next whole minute after `secs`
pub const fn secs_until_next_minute(secs: u64) -> u64 {
    SECS_PER_MINUTE - secs % SECS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twenty_four_hour_format() {
        let style = ClockStyle::TwentyFourHour;
        assert_eq!(WallClock::new(0, 0).unwrap().format(style).as_str(), "00:00");
        assert_eq!(WallClock::new(5, 7).unwrap().format(style).as_str(), "05:07");
        assert_eq!(WallClock::new(17, 30).unwrap().format(style).as_str(), "17:30");
        assert_eq!(WallClock::new(23, 59).unwrap().format(style).as_str(), "23:59");
    }

    #[test]
    fn test_twelve_hour_format() {
        let style = ClockStyle::TwelveHour;
        assert_eq!(WallClock::new(0, 15).unwrap().format(style).as_str(), "12:15");
        assert_eq!(WallClock::new(5, 0).unwrap().format(style).as_str(), "05:00");
        assert_eq!(WallClock::new(12, 0).unwrap().format(style).as_str(), "12:00");
        assert_eq!(WallClock::new(13, 45).unwrap().format(style).as_str(), "01:45");
        assert_eq!(WallClock::new(23, 59).unwrap().format(style).as_str(), "11:59");
    }

    #[test]
    fn test_default_style_is_twenty_four_hour() {
        assert_eq!(ClockStyle::default(), ClockStyle::TwentyFourHour);
    }

    #[test]
    fn test_style_from_config() {
        assert_eq!(ClockStyle::from_config("12h"), Some(ClockStyle::TwelveHour));
        assert_eq!(ClockStyle::from_config("24h"), Some(ClockStyle::TwentyFourHour));
        assert_eq!(ClockStyle::from_config("24"), None);
    }

    #[test]
    fn test_invalid_wall_clock() {
        assert!(WallClock::new(24, 0).is_none());
        assert!(WallClock::new(0, 60).is_none());
    }

    #[test]
    fn test_from_unix_seconds() {
        // 2024-01-01T05:00:00Z
        let clock = WallClock::from_unix_seconds(1_704_085_200);
        assert_eq!((clock.hour(), clock.minute()), (5, 0));

        let clock = WallClock::from_unix_seconds(1_704_085_200 + 17 * 3600 + 59 * 60 + 59);
        assert_eq!((clock.hour(), clock.minute()), (22, 59));
    }

    #[test]
    fn test_secs_until_next_minute() {
        assert_eq!(secs_until_next_minute(0), 60);
        assert_eq!(secs_until_next_minute(59), 1);
        assert_eq!(secs_until_next_minute(121), 59);
    }

    proptest! {
        #[test]
        fn unix_seconds_always_valid(secs in any::<u64>()) {
            let clock = WallClock::from_unix_seconds(secs);
            prop_assert!(WallClock::new(clock.hour(), clock.minute()).is_some());
        }

        #[test]
        fn labels_are_five_chars(hour in 0u8..24, minute in 0u8..60) {
            let clock = WallClock::new(hour, minute).unwrap();
            for style in [ClockStyle::TwelveHour, ClockStyle::TwentyFourHour] {
                let label = clock.format(style);
                prop_assert_eq!(label.len(), 5);
                prop_assert_eq!(label.as_bytes()[2], b':');
            }
        }

        #[test]
        fn twelve_hour_range(hour in 0u8..24) {
            let shown = ClockStyle::TwelveHour.display_hour(hour);
            prop_assert!((1..=12).contains(&shown));
        }
    }
}
