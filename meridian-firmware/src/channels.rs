//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use meridian_core::clock::WallClock;

/// UTC wall clock at each minute boundary (tick task → face task)
pub static MINUTE_TICK: Signal<CriticalSectionRawMutex, WallClock> = Signal::new();
