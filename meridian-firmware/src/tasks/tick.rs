//! Minute tick task
//!
//! Sleeps until each minute boundary and hands the new wall clock to the
//! face task.

use defmt::*;
use embassy_time::{Duration, Timer};

use meridian_core::clock::{secs_until_next_minute, WallClock};

use crate::channels::MINUTE_TICK;
use crate::clock::unix_seconds;

/// Tick task - signals the face once per minute
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    loop {
        let wait = secs_until_next_minute(unix_seconds());
        Timer::after(Duration::from_secs(wait)).await;

        // Re-read after the sleep; the timer may fire late
        let now = WallClock::from_unix_seconds(unix_seconds());
        MINUTE_TICK.signal(now);
    }
}
