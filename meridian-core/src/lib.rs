//! Board-agnostic core logic for the Meridian watch face
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Zone table and the hour-to-zone resolver
//! - Wall clock and time label formatting
//! - Display state (which zone is currently on screen)
//! - Host abstraction traits (text surface, image store)
//! - Scoped ownership of the background image
//! - The per-minute display updater
//! - Configuration type definitions and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod background;
pub mod clock;
pub mod config;
pub mod face;
pub mod state;
pub mod traits;
pub mod zones;

pub use face::{FaceError, TickReport, Watchface};
