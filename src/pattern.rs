//! Static Pattern Renderer
//!
//! Classifies pixels of the fixed "top line" glyph. Each glyph cell is
//! magnified to an 8x8 block, the same way background tiles are addressed:
//! divide the screen coordinate by the cell size to find the cell, then read
//! the bit.

use crate::bitmap::{Bitmap, TOP_LINE_GLYPH};
use crate::common::{Coord, Rect};

/// Side of one magnified cell in pixels
pub const CELL_SIZE: i32 = 8;
/// Screen column of the glyph's left edge
pub const LEFT: i32 = 250;
/// Screen row of the glyph's top edge
pub const TOP: i32 = 10;

/// A glyph pinned to a fixed screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPattern {
    pub glyph: Bitmap,
    pub left: i32,
    pub top: i32,
    pub cell_size: i32,
}

impl Default for StaticPattern {
    fn default() -> Self {
        Self {
            glyph: TOP_LINE_GLYPH,
            left: LEFT,
            top: TOP,
            cell_size: CELL_SIZE,
        }
    }
}

impl StaticPattern {
    /// Screen area covered by the magnified glyph
    pub fn footprint(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.glyph.width() as i32 * self.cell_size,
            self.top + self.glyph.height() as i32 * self.cell_size,
        )
    }

    /// Cell containing a pixel, or `None` when the pixel is off the glyph
    #[inline]
    pub fn cell_of(&self, pix_x: Coord, pix_y: Coord) -> Option<(i32, i32)> {
        let (x, y) = (pix_x as i32, pix_y as i32);
        // Truncating division maps pixels just left of or above the glyph onto cell 0
        if !self.footprint().contains(x, y) {
            return None;
        }
        Some(((x - self.left) / self.cell_size, (y - self.top) / self.cell_size))
    }

    /// Classify a pixel against the pattern
    pub fn is_static_pixel(&self, pix_x: Coord, pix_y: Coord) -> bool {
        match self.cell_of(pix_x, pix_y) {
            Some((cell_x, cell_y)) => self.glyph.cell(cell_x, cell_y),
            None => false,
        }
    }
}

/// Classify a pixel against the default top-line pattern
pub fn is_static_pixel(pix_x: Coord, pix_y: Coord) -> bool {
    StaticPattern::default().is_static_pixel(pix_x, pix_y)
}
