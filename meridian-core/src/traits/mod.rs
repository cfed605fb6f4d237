//! Host abstraction traits
//!
//! These traits define the interface between the watch-face logic
//! and whatever toolkit or hardware puts pixels on the screen.

pub mod image;
pub mod surface;

pub use image::{ImageError, ImageId, ImageStore};
pub use surface::{FaceSurface, SurfaceError, TextRegion};

#[cfg(test)]
pub(crate) mod mock;
