//! Display surface trait

/// Errors that can occur while drawing to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication with the display failed
    Communication,
    /// Surface not created yet, or already torn down
    NotReady,
    /// Text does not fit the region
    BufferOverflow,
}

/// Text regions on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRegion {
    /// Current UTC time ("17:05")
    Time,
    /// Name of the selected zone
    ZoneName,
    /// Offset label ("UTC+0")
    UtcOffset,
}

impl TextRegion {
    /// All regions, top to bottom
    pub const ALL: [TextRegion; 3] = [
        TextRegion::Time,
        TextRegion::ZoneName,
        TextRegion::UtcOffset,
    ];
}

/// Rendering surface provided by the host
///
/// The face only issues "set text" and "set image" commands; the surface
/// owns layout, fonts and rasterization. `I` is the image resource type
/// produced by the matching [`ImageStore`](super::ImageStore).
pub trait FaceSurface<I> {
    /// Replace the text shown in a region
    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), SurfaceError>;

    /// Show an image as the background
    ///
    /// The surface must not keep a reference past this call; the image
    /// may be released as soon as it is replaced.
    fn set_background(&mut self, image: &I) -> Result<(), SurfaceError>;

    /// Remove the background image
    fn clear_background(&mut self) -> Result<(), SurfaceError>;
}
