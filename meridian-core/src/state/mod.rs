//! Display state
//!
//! Tracks which zone's background is on screen so the image is only
//! replaced when the zone actually changes.

pub mod display;

pub use display::{DisplayState, ZoneChange};
