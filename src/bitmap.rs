//! Glyph Bitmaps
//!
//! Fixed binary glyphs used by the sprite and static pattern classifiers.
//! Each row is packed into a `u16` with column 0 in the most significant of
//! the `width` used bits, so the literals below read left to right exactly
//! as the glyph appears on screen.

/// Rectangular grid of on/off cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    rows: &'static [u16],
}

impl Bitmap {
    /// Build a bitmap, rejecting rows that spill past `width`
    pub const fn new(width: usize, rows: &'static [u16]) -> Self {
        assert!(width > 0 && width <= 16, "bitmap width must be 1..=16");
        let mut i = 0;
        while i < rows.len() {
            assert!(
                width == 16 || rows[i] >> (width as u32) == 0,
                "bitmap row wider than declared width"
            );
            i += 1;
        }
        Self { width, rows }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Read the cell at column `x`, row `y`
    ///
    /// Anything outside the grid, negative indices included, reads as unset.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.rows.len() {
            return false;
        }
        (self.rows[y] >> (self.width - 1 - x)) & 1 != 0
    }

    /// Total number of set cells
    pub fn population(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

/// "U" glyph drawn for the sprite and each player segment (11 wide, 16 tall)
pub const U_GLYPH: Bitmap = Bitmap::new(
    11,
    &[
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11100000111,
        0b11110001111,
        0b01111111110,
        0b00111111100,
        0b00011111000,
    ],
);

/// Static top-line glyph (14 wide, 16 tall), magnified to 8x8 cells on screen
pub const TOP_LINE_GLYPH: Bitmap = Bitmap::new(
    14,
    &[
        0b00000000000000,
        0b01111110111111,
        0b01111110111111,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00011000001100,
        0b00000000000000,
    ],
);
