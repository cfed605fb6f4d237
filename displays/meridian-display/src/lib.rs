//! Display components for the Meridian watch face
//!
//! This crate provides:
//! - `Frame`, a 128x64 monochrome frame buffer laid out in SH1106 pages
//! - The face layout (which region goes where, in which font)
//! - `FaceScreen`, a buffered surface implementing `FaceSurface`
//! - Procedurally drawn zone backdrops and a single-slot `BackdropStore`
//!
//! # Architecture
//!
//! The watch-face logic in `meridian-core` only knows about text regions
//! and image handles. `FaceScreen` turns those commands into pixels; the
//! firmware then pushes the composed `Frame` to the panel. Nothing here
//! touches hardware, so the whole crate is tested on the host.

#![no_std]

pub mod backdrop;
pub mod frame;
pub mod layout;
pub mod screen;

// Re-export key types
pub use backdrop::{Backdrop, BackdropStore};
pub use frame::{Frame, HEIGHT, PAGES, WIDTH};
pub use screen::{FaceScreen, REGION_TEXT_LEN};
