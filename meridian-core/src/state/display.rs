//! Displayed-zone state
//!
//! Two outcomes per tick: the zone is unchanged (text refresh only) or a
//! new zone was entered (text refresh plus image swap).

use crate::zones::ZoneIndex;

/// Result of comparing a resolved zone with the displayed one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ZoneChange {
    /// Same zone as last time; the background stays
    Unchanged,
    /// Different zone (or nothing shown yet); the background must change
    Entered {
        from: Option<ZoneIndex>,
        to: ZoneIndex,
    },
}

impl ZoneChange {
    /// Check if the background must be replaced
    pub fn needs_swap(&self) -> bool {
        matches!(self, ZoneChange::Entered { .. })
    }
}

/// Zone whose background is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// `None` until the first background is shown
    last_zone: Option<ZoneIndex>,
}

impl DisplayState {
    /// Create a state with nothing displayed
    pub const fn new() -> Self {
        Self { last_zone: None }
    }

    /// Zone currently displayed
    pub fn last_zone(&self) -> Option<ZoneIndex> {
        self.last_zone
    }

    /// Compare a freshly resolved zone with the displayed one
    pub fn observe(&self, zone: ZoneIndex) -> ZoneChange {
        if self.last_zone == Some(zone) {
            ZoneChange::Unchanged
        } else {
            ZoneChange::Entered {
                from: self.last_zone,
                to: zone,
            }
        }
    }

    /// Record that `zone` is now displayed
    ///
    /// Call only after the background swap succeeded.
    pub fn commit(&mut self, zone: ZoneIndex) {
        self.last_zone = Some(zone);
    }

    /// Forget the displayed zone (background torn down)
    pub fn reset(&mut self) {
        self.last_zone = None;
    }
}
