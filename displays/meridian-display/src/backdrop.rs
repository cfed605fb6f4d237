//! Zone backdrops
//!
//! Each zone's background is drawn on demand instead of stored as a
//! bitmap: a horizon line, a 24-cell meridian strip with the zone's cell
//! filled, and a sun sitting above that cell. The store decodes into a
//! single slot, so a backdrop must be returned before the next is loaded.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{Point, Primitive},
    primitives::{Circle, Line, PrimitiveStyle},
    Drawable,
};
use meridian_core::traits::{ImageError, ImageId, ImageStore};
use meridian_core::zones::ZONE_COUNT;

use crate::frame::{Frame, WIDTH};
use crate::layout::{strip_cell, CELL_WIDTH, HORIZON_Y, STRIP_X, SUN_DIAMETER, SUN_TOP};

/// A decoded backdrop
pub struct Backdrop {
    id: ImageId,
    frame: Frame,
}

impl Backdrop {
    /// Image this backdrop was decoded from
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Backdrop pixels
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

/// Draw the backdrop for zone cell `index` into `frame`
pub fn draw_backdrop(index: u8, frame: &mut Frame) {
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);

    frame.clear();

    // Drawing into a Frame cannot fail
    Line::new(
        Point::new(0, HORIZON_Y),
        Point::new(WIDTH as i32 - 1, HORIZON_Y),
    )
    .into_styled(stroke)
    .draw(frame)
    .ok();

    for cell in 0..ZONE_COUNT as u8 {
        let style = if cell == index { fill } else { stroke };
        strip_cell(cell).into_styled(style).draw(frame).ok();
    }

    // Sun centered over the active cell
    let cell_center = STRIP_X + index as i32 * CELL_WIDTH + CELL_WIDTH / 2;
    let sun_left = cell_center - SUN_DIAMETER as i32 / 2;
    Circle::new(Point::new(sun_left, SUN_TOP), SUN_DIAMETER)
        .into_styled(fill)
        .draw(frame)
        .ok();
}

/// Single-slot backdrop decoder
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BackdropStore {
    live: u8,
    loads: u32,
}

impl BackdropStore {
    /// Number of backdrops currently out
    pub const CAPACITY: u8 = 1;

    /// Create an empty store
    pub const fn new() -> Self {
        Self { live: 0, loads: 0 }
    }

    /// Backdrops currently held by callers
    pub fn live(&self) -> u8 {
        self.live
    }

    /// Total backdrops decoded since boot
    pub fn loads(&self) -> u32 {
        self.loads
    }
}

impl ImageStore for BackdropStore {
    type Image = Backdrop;

    fn load(&mut self, id: ImageId) -> Result<Backdrop, ImageError> {
        if id.get() as usize >= ZONE_COUNT {
            return Err(ImageError::NotFound);
        }
        if self.live >= Self::CAPACITY {
            return Err(ImageError::Exhausted);
        }

        let mut frame = Frame::new();
        draw_backdrop(id.get(), &mut frame);
        self.live += 1;
        self.loads += 1;
        Ok(Backdrop { id, frame })
    }

    fn unload(&mut self, image: Backdrop) {
        drop(image);
        self.live = self.live.saturating_sub(1);
    }
}
