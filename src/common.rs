//! Common types and utilities for the pixel engine
//!
//! This module defines the coordinate type aliases used by every classifier,
//! the screen geometry, and a few range helpers.

/// Pixel coordinate on one axis (VGA fits comfortably in 16 bits)
pub type Coord = u16;

/// Horizontal scroll phase; any non-negative value is valid
pub type Offset = u32;

/// Signed bar amplitude stored in the sine table
pub type Amplitude = i16;

/// Visible screen width in pixels
pub const SCREEN_WIDTH: usize = 640;

/// Visible screen height in pixels
pub const SCREEN_HEIGHT: usize = 480;

/// A pixel coordinate supplied per query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub x: Coord,
    pub y: Coord,
}

impl Pixel {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

/// Half-open screen rectangle `[left, right) x [top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Check if a point lies inside the rectangle
    ///
    /// # Arguments
    /// * `x` - Screen column
    /// * `y` - Screen row
    ///
    /// # Returns
    /// `true` if `left <= x < right` and `top <= y < bottom`, `false` otherwise
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        within(x, self.left, self.right) && within(y, self.top, self.bottom)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Check if a value is within a half-open range
///
/// # Arguments
/// * `value` - The value to check
/// * `low` - The lower bound (inclusive)
/// * `high` - The upper bound (exclusive)
///
/// # Returns
/// `true` if `low <= value < high`, `false` otherwise
#[inline]
pub fn within(value: i32, low: i32, high: i32) -> bool {
    value >= low && value < high
}
