//! Fixed zone table
//!
//! 24 records, one per whole-hour UTC offset from -11 to +12, ordered
//! west to east. The table is compiled in and never changes at runtime.

use heapless::String;

use super::resolver::ZoneIndex;
use crate::traits::ImageId;

/// Number of zones in the table
pub const ZONE_COUNT: usize = 24;

/// Prefix of the rendered offset label ("UTC-11")
pub const OFFSET_PREFIX: &str = "UTC";

/// Capacity of the rendered offset label
pub const OFFSET_LABEL_LEN: usize = 8;

/// Rendered offset label
pub type OffsetLabel = String<OFFSET_LABEL_LEN>;

/// One entry in the zone table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneRecord {
    /// Place name shown on the face
    pub name: &'static str,
    /// Signed offset from UTC in hours, as shown after the "UTC" prefix
    pub utc_offset: &'static str,
    /// Background image for this zone
    pub image: ImageId,
}

const fn zone(name: &'static str, utc_offset: &'static str, image: u8) -> ZoneRecord {
    ZoneRecord {
        name,
        utc_offset,
        image: ImageId::new(image),
    }
}

/// The zone table, indexed by [`ZoneIndex`]
pub const ZONES: [ZoneRecord; ZONE_COUNT] = [
    zone("American Samoa", "-11", 0),
    zone("Honolulu", "-10", 1),
    zone("Ketchikan", "-9", 2),
    zone("Las Vegas", "-8", 3),
    zone("Denver", "-7", 4),
    zone("Chicago", "-6", 5),
    zone("Miami", "-5", 6),
    zone("Puerto Rico", "-4", 7),
    zone("Rio de Janeiro", "-3", 8),
    zone("Fernando de Noronha", "-2", 9),
    zone("Cape Verde", "-1", 10),
    zone("London", "+0", 11),
    zone("Paris", "+1", 12),
    zone("Cairo", "+2", 13),
    zone("Moscow", "+3", 14),
    zone("Dubai", "+4", 15),
    zone("Pakistan", "+5", 16),
    zone("Bangladesh", "+6", 17),
    zone("Bangkok", "+7", 18),
    zone("Manila", "+8", 19),
    zone("Tokyo", "+9", 20),
    zone("Sydney", "+10", 21),
    zone("Solomon Islands", "+11", 22),
    zone("New Zealand", "+12", 23),
];

const fn longest_offset() -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < ZONE_COUNT {
        let len = ZONES[i].utc_offset.len();
        if len > longest {
            longest = len;
        }
        i += 1;
    }
    longest
}

// Every offset label must fit its buffer
const _: () = assert!(
    OFFSET_PREFIX.len() + longest_offset() <= OFFSET_LABEL_LEN,
    "offset label buffer too small for zone table"
);

/// Look up the record for a zone
pub fn zone_record(zone: ZoneIndex) -> &'static ZoneRecord {
    &ZONES[zone.as_usize()]
}

/// Build the "UTC±N" label for a record
pub fn offset_label(record: &ZoneRecord) -> OffsetLabel {
    let mut label = OffsetLabel::new();
    // Capacity checked against the whole table at compile time
    let _ = label.push_str(OFFSET_PREFIX);
    let _ = label.push_str(record.utc_offset);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::{resolve_zone, REFERENCE_INDEX};

    #[test]
    fn test_reference_zone_is_london() {
        let london = zone_record(ZoneIndex::new(REFERENCE_INDEX).unwrap());
        assert_eq!(london.name, "London");
        assert_eq!(offset_label(london).as_str(), "UTC+0");
    }

    #[test]
    fn test_offsets_follow_index() {
        for zone in ZoneIndex::all() {
            let record = zone_record(zone);
            let hours: i8 = record.utc_offset.parse().unwrap();
            assert_eq!(hours as i16, zone.get() as i16 - REFERENCE_INDEX as i16);
            assert!(record.utc_offset.starts_with(['+', '-']), "{}", record.name);
        }
    }

    #[test]
    fn test_images_are_distinct_and_ordered() {
        for zone in ZoneIndex::all() {
            assert_eq!(zone_record(zone).image.get(), zone.get());
        }
    }

    #[test]
    fn test_every_label_fits() {
        for record in ZONES.iter() {
            let label = offset_label(record);
            assert_eq!(label.len(), OFFSET_PREFIX.len() + record.utc_offset.len());
            assert!(label.starts_with(OFFSET_PREFIX));
        }
    }

    #[test]
    fn test_four_utc_is_american_samoa() {
        let record = zone_record(resolve_zone(4));
        assert_eq!(record.name, "American Samoa");
        assert_eq!(record.utc_offset, "-11");
        assert_eq!(offset_label(record).as_str(), "UTC-11");
    }

    #[test]
    fn test_names_fit_one_line() {
        for record in ZONES.iter() {
            assert!(!record.name.is_empty());
            assert!(record.name.len() <= 21, "{}", record.name);
        }
    }
}
