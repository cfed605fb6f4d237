//! Hour-to-zone resolver
//!
//! The table is ordered west to east with London at index 11. At 17:00 UTC
//! London is the zone showing five o'clock; every hour later moves the
//! answer one zone west, wrapping around the date line.

use super::table::ZONE_COUNT;

/// Table index of the zero-offset zone (London)
pub const REFERENCE_INDEX: u8 = 11;

/// UTC hour at which the reference zone is selected
pub const REFERENCE_HOUR: u8 = 17;

/// Position in the zone table
///
/// Always in `0..ZONE_COUNT`. Only the resolver and [`ZoneIndex::new`]
/// can produce one, so table lookups never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneIndex(u8);

impl ZoneIndex {
    /// Create a zone index, returning `None` if out of range
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < ZONE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw index value
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index as usize, for table access
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every zone index in table order
    pub fn all() -> impl Iterator<Item = ZoneIndex> {
        (0..ZONE_COUNT as u8).map(ZoneIndex)
    }
}

/// Resolve the UTC hour to a zone index
///
/// `shift = 11 + (17 - hour)`, wrapped into `0..24`. Hours above 23 are
/// reduced modulo 24 first so the result is always a valid index.
pub fn resolve_zone(hour_utc: u8) -> ZoneIndex {
    let hour = (hour_utc % 24) as i16;
    let mut shift = REFERENCE_INDEX as i16 + (REFERENCE_HOUR as i16 - hour);
    if shift < 0 {
        shift += ZONE_COUNT as i16;
    }
    if shift > ZONE_COUNT as i16 - 1 {
        shift -= ZONE_COUNT as i16;
    }
    ZoneIndex(shift as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_hour_selects_london() {
        assert_eq!(resolve_zone(REFERENCE_HOUR).get(), REFERENCE_INDEX);
        assert_eq!(resolve_zone(17).get(), 11);
    }

    #[test]
    fn test_wraparound_boundaries() {
        // 11 + 17 - 0 = 28 wraps down to 4
        assert_eq!(resolve_zone(0).get(), 4);
        assert_eq!(resolve_zone(23).get(), 5);
        assert_eq!(resolve_zone(4).get(), 0);
        assert_eq!(resolve_zone(5).get(), 23);
        assert_eq!(resolve_zone(18).get(), 10);
    }

    #[test]
    fn test_matches_modular_form() {
        for hour in 0..24u8 {
            let expected = (28 - hour as i16).rem_euclid(24) as u8;
            assert_eq!(resolve_zone(hour).get(), expected, "hour {}", hour);
        }
    }

    #[test]
    fn test_bijection_over_a_day() {
        let mut seen = [false; ZONE_COUNT];
        for hour in 0..24u8 {
            let zone = resolve_zone(hour).as_usize();
            assert!(!seen[zone], "zone {} produced twice", zone);
            seen[zone] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_zone_index_bounds() {
        assert!(ZoneIndex::new(0).is_some());
        assert!(ZoneIndex::new(23).is_some());
        assert!(ZoneIndex::new(24).is_none());
        assert_eq!(ZoneIndex::all().count(), ZONE_COUNT);
    }

    proptest! {
        #[test]
        fn resolved_index_in_range(hour in any::<u8>()) {
            prop_assert!(resolve_zone(hour).as_usize() < ZONE_COUNT);
        }

        #[test]
        fn resolved_zone_shows_five_pm(hour in 0u8..24) {
            // Zone i sits at UTC offset (i - 11) hours
            let offset = resolve_zone(hour).get() as i16 - REFERENCE_INDEX as i16;
            let local = (hour as i16 + offset).rem_euclid(24);
            prop_assert_eq!(local, REFERENCE_HOUR as i16);
        }

        #[test]
        fn next_hour_moves_one_zone_west(hour in 0u8..24) {
            let here = resolve_zone(hour).get() as i16;
            let next = resolve_zone((hour + 1) % 24).get() as i16;
            prop_assert_eq!((here - 1).rem_euclid(24), next);
        }
    }
}
