//! UTC time source
//!
//! The board has no RTC backup, so time starts at the moment the firmware
//! was built and advances with the embassy time driver.

use embassy_time::Instant;
use meridian_core::clock::WallClock;

// Defines BUILD_EPOCH
include!(concat!(env!("OUT_DIR"), "/epoch.rs"));

/// Seconds since the Unix epoch
///
/// Restarts from the build time on every boot, so this is only as
/// accurate as the time since flashing without a power cycle.
pub fn unix_seconds() -> u64 {
    BUILD_EPOCH + Instant::now().as_secs()
}

/// Current UTC time of day
pub fn wall_clock() -> WallClock {
    WallClock::from_unix_seconds(unix_seconds())
}
