//! Image resource trait
//!
//! Background images are scarce on a watch: decoding one costs RAM, so
//! the store hands out owned resources that must be returned before the
//! next one is taken.

/// Identifier of a background image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageId(u8);

impl ImageId {
    /// Create an image identifier
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw identifier
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Image loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// No resource with this identifier
    NotFound,
    /// Store has no free slot (a previous image was not released)
    Exhausted,
}

/// Source of background image resources
pub trait ImageStore {
    /// Loaded image resource
    type Image;

    /// Acquire the resource for `id`
    fn load(&mut self, id: ImageId) -> Result<Self::Image, ImageError>;

    /// Release a resource previously returned by [`load`](Self::load)
    fn unload(&mut self, image: Self::Image);
}
