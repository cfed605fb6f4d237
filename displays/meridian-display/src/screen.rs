//! Buffered face screen
//!
//! Collects text and background commands from the watch face and composes
//! them into a [`Frame`] when asked. Rendering is deferred so one tick's
//! three text writes and optional background swap cost a single flush.

use embedded_graphics::{
    mono_font::MonoTextStyleBuilder,
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use heapless::String;
use meridian_core::traits::{FaceSurface, SurfaceError, TextRegion};

use crate::backdrop::Backdrop;
use crate::frame::Frame;
use crate::layout::{region_anchor, region_columns, region_font};

/// Capacity of each text region (the widest fits 21 characters)
pub const REGION_TEXT_LEN: usize = 24;

/// Buffered screen for the watch face
pub struct FaceScreen {
    /// Composed output
    frame: Frame,
    /// Copy of the current backdrop, if any
    background: Option<Frame>,
    /// Text per region, in `TextRegion::ALL` order
    texts: [String<REGION_TEXT_LEN>; 3],
    /// Whether the frame needs recomposing
    dirty: bool,
}

impl Default for FaceScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(region: TextRegion) -> usize {
    match region {
        TextRegion::Time => 0,
        TextRegion::ZoneName => 1,
        TextRegion::UtcOffset => 2,
    }
}

impl FaceScreen {
    /// Create an empty screen
    pub fn new() -> Self {
        Self {
            frame: Frame::new(),
            background: None,
            texts: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Text currently set for a region
    pub fn text(&self, region: TextRegion) -> &str {
        self.texts[slot(region)].as_str()
    }

    /// Check if a background is set
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Compose background and text into the frame
    ///
    /// Returns the frame and marks the screen clean.
    pub fn render(&mut self) -> &Frame {
        match &self.background {
            Some(background) => self.frame.clone_from(background),
            None => self.frame.clear(),
        }

        for region in TextRegion::ALL {
            let text = self.texts[slot(region)].as_str();
            if text.is_empty() {
                continue;
            }

            let character_style = MonoTextStyleBuilder::new()
                .font(region_font(region))
                .text_color(BinaryColor::On)
                .background_color(BinaryColor::Off)
                .build();
            let text_style = TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Top)
                .build();

            // Drawing into a Frame cannot fail
            Text::with_text_style(text, region_anchor(region), character_style, text_style)
                .draw(&mut self.frame)
                .ok();
        }

        self.dirty = false;
        &self.frame
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FaceScreen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FaceScreen[");
        for (i, text) in self.texts.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", text.as_str());
        }
        defmt::write!(
            f,
            "; background={}, dirty={}]",
            self.background.is_some(),
            self.dirty
        );
    }
}

impl FaceSurface<Backdrop> for FaceScreen {
    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), SurfaceError> {
        if text.chars().count() > region_columns(region) {
            return Err(SurfaceError::BufferOverflow);
        }

        let current = &mut self.texts[slot(region)];
        if current.as_str() != text {
            current.clear();
            current
                .push_str(text)
                .map_err(|_| SurfaceError::BufferOverflow)?;
            self.dirty = true;
        }
        Ok(())
    }

    fn set_background(&mut self, image: &Backdrop) -> Result<(), SurfaceError> {
        match &mut self.background {
            Some(background) => background.clone_from(image.frame()),
            None => self.background = Some(image.frame().clone()),
        }
        self.dirty = true;
        Ok(())
    }

    fn clear_background(&mut self) -> Result<(), SurfaceError> {
        if self.background.take().is_some() {
            self.dirty = true;
        }
        Ok(())
    }
}
