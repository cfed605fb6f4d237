//! Face layout
//!
//! Fixed positions for the 128x64 panel:
//!
//! ```text
//!  y  0 +--------------------------+
//!  y  1 |          17:05           |  time, 10x20 font
//!  y 22 |          London          |  zone name, 6x10 font
//!  y 32 |          UTC+0           |  offset, 6x10 font
//!  y 43 |            ()            |  sun (backdrop)
//!  y 50 |--------------------------|  horizon (backdrop)
//!  y 53 |[][][][][][##][][][][][][]|  meridian strip (backdrop)
//!  y 63 +--------------------------+
//! ```

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont,
    },
    prelude::{Point, Size},
    primitives::Rectangle,
};
use meridian_core::traits::TextRegion;

use crate::frame::WIDTH;

/// Top edge of the time label
pub const TIME_Y: i32 = 1;

/// Top edge of the zone name
pub const ZONE_NAME_Y: i32 = 22;

/// Top edge of the offset label
pub const UTC_OFFSET_Y: i32 = 32;

/// Horizon line of the backdrop
pub const HORIZON_Y: i32 = 50;

/// Left edge of the meridian strip
pub const STRIP_X: i32 = 4;

/// Top edge of the meridian strip
pub const STRIP_Y: i32 = 53;

/// Width of one zone cell in the strip (cells share edges)
pub const CELL_WIDTH: i32 = 5;

/// Height of the meridian strip
pub const STRIP_HEIGHT: u32 = 11;

/// Diameter of the sun marker
pub const SUN_DIAMETER: u32 = 7;

/// Top edge of the sun marker, which sits one pixel above the horizon
pub const SUN_TOP: i32 = HORIZON_Y - SUN_DIAMETER as i32 - 1;

/// Font used for a region
pub fn region_font(region: TextRegion) -> &'static MonoFont<'static> {
    match region {
        TextRegion::Time => &FONT_10X20,
        TextRegion::ZoneName | TextRegion::UtcOffset => &FONT_6X10,
    }
}

/// Top edge of a region
pub fn region_top(region: TextRegion) -> i32 {
    match region {
        TextRegion::Time => TIME_Y,
        TextRegion::ZoneName => ZONE_NAME_Y,
        TextRegion::UtcOffset => UTC_OFFSET_Y,
    }
}

/// Anchor for centered text in a region
pub fn region_anchor(region: TextRegion) -> Point {
    Point::new(WIDTH as i32 / 2, region_top(region))
}

/// Full-width band a region may draw into
pub fn region_bounds(region: TextRegion) -> Rectangle {
    let height = region_font(region).character_size.height;
    Rectangle::new(
        Point::new(0, region_top(region)),
        Size::new(WIDTH as u32, height),
    )
}

/// Maximum characters that fit across the panel in a region's font
pub fn region_columns(region: TextRegion) -> usize {
    let font = region_font(region);
    let advance = font.character_size.width + font.character_spacing;
    WIDTH / advance as usize
}

/// Outline of zone cell `index` in the meridian strip
pub fn strip_cell(index: u8) -> Rectangle {
    Rectangle::new(
        Point::new(STRIP_X + index as i32 * CELL_WIDTH, STRIP_Y),
        Size::new(CELL_WIDTH as u32 + 1, STRIP_HEIGHT),
    )
}
