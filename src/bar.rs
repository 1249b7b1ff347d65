//! Scrolling Bar Renderer
//!
//! Classifies pixels belonging to the "double sin" bar field: a row of
//! vertical stripes whose middle is carved out by a notch that rises and
//! falls with the sine LUT as the field scrolls horizontally.

use crate::common::{Coord, Offset, Rect, SCREEN_WIDTH};
use crate::sine_lut::{self, SINE_PERIOD};

/// Width of one bar column (stripe plus gap)
pub const BAR_WIDTH: u32 = 40;
/// Visible stripe inside each column
pub const VISIBLE_WIDTH: u32 = 25;
/// Height of each visible band next to the notch
pub const BAR_HEIGHT: i32 = 60;
/// Distance from the window top to the peak of the notch
pub const NOTCH_MARGIN: i32 = 50;
/// Bar window top edge
pub const TOP_Y: i32 = 180;
/// Bar window bottom edge (exclusive)
pub const BOTTOM_Y: i32 = 400;

/// Layout of the bar field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Region the field is drawn in; everything outside is never a bar pixel
    pub window: Rect,
    pub bar_width: u32,
    pub visible_width: u32,
    pub bar_height: i32,
    pub notch_margin: i32,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            window: Rect::new(0, TOP_Y, SCREEN_WIDTH as i32, BOTTOM_Y),
            bar_width: BAR_WIDTH,
            visible_width: VISIBLE_WIDTH,
            bar_height: BAR_HEIGHT,
            notch_margin: NOTCH_MARGIN,
        }
    }
}

impl BarLayout {
    /// Scroll distance after which the whole pattern repeats
    pub fn period(&self) -> u32 {
        self.bar_width * SINE_PERIOD as u32
    }

    /// LUT phase of a column after scrolling
    #[inline]
    pub fn phase(&self, pix_x: Coord, x_offset: Offset) -> usize {
        let scrolled = scrolled_x(pix_x, x_offset);
        ((scrolled / self.bar_width as u64) % SINE_PERIOD as u64) as usize
    }

    /// Whether a scrolled column lands on a stripe rather than a gap
    #[inline]
    pub fn in_stripe(&self, pix_x: Coord, x_offset: Offset) -> bool {
        scrolled_x(pix_x, x_offset) % (self.bar_width as u64) < self.visible_width as u64
    }

    /// Whether a row is clear of the notch for the given amplitude
    #[inline]
    pub fn outside_notch(&self, pix_y: Coord, amplitude: i32) -> bool {
        let y = pix_y as i32;
        let upper_end = self.window.top + self.notch_margin - amplitude + self.bar_height;
        let lower_start = self.window.bottom - amplitude - self.bar_height;
        upper_end > y || y > lower_start
    }

    /// Classify a pixel against the bar field scrolled by `x_offset`
    pub fn is_bar_pixel(&self, pix_x: Coord, pix_y: Coord, x_offset: Offset) -> bool {
        if !self.window.contains(pix_x as i32, pix_y as i32) {
            return false;
        }

        let amplitude = sine_lut::lookup(self.phase(pix_x, x_offset)) as i32;
        self.outside_notch(pix_y, amplitude) && self.in_stripe(pix_x, x_offset)
    }
}

/// Classify a pixel against the default bar layout
pub fn is_bar_pixel(pix_x: Coord, pix_y: Coord, x_offset: Offset) -> bool {
    BarLayout::default().is_bar_pixel(pix_x, pix_y, x_offset)
}

/// Widen before adding so large offsets never wrap
#[inline]
fn scrolled_x(pix_x: Coord, x_offset: Offset) -> u64 {
    pix_x as u64 + x_offset as u64
}
