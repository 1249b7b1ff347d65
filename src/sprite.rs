//! Sprite Renderer
//!
//! Classifies pixels belonging to a glyph anchored at a movable origin, and
//! the three-segment "player" built from that same glyph.
//!
//! The origin is not the glyph's top-left corner: it sits 5 columns in and
//! 10 rows down, so a sprite at (ox, oy) covers `[ox-5, ox+6) x [oy-10, oy+6)`
//! for the 11x16 U glyph.

use crate::bitmap::{Bitmap, U_GLYPH};
use crate::common::{Coord, Rect};

/// Columns between the glyph's left edge and its origin
pub const ANCHOR_X: i32 = 5;
/// Rows between the glyph's top edge and its origin
pub const ANCHOR_Y: i32 = 10;

/// Horizontal offset of the second player segment
pub const SECOND_SEGMENT_OFFSET: i32 = 17;
/// Horizontal offset of the third player segment
pub const THIRD_SEGMENT_OFFSET: i32 = 27;
/// Third segment offset used by the earlier player layout
pub const LEGACY_THIRD_SEGMENT_OFFSET: i32 = 10;

/// Externally owned sprite origin register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpritePosition {
    pub x: Coord,
    pub y: Coord,
}

impl SpritePosition {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

/// A glyph with its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: Bitmap,
    pub anchor_x: i32,
    pub anchor_y: i32,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            glyph: U_GLYPH,
            anchor_x: ANCHOR_X,
            anchor_y: ANCHOR_Y,
        }
    }
}

impl Sprite {
    /// Screen area the glyph can touch when anchored at `origin`
    pub fn footprint(&self, origin_x: i32, origin_y: i32) -> Rect {
        let left = origin_x - self.anchor_x;
        let top = origin_y - self.anchor_y;
        Rect::new(
            left,
            top,
            left + self.glyph.width() as i32,
            top + self.glyph.height() as i32,
        )
    }

    /// Classify a pixel against the glyph anchored at a signed origin
    #[inline]
    pub fn hit(&self, pix_x: i32, pix_y: i32, origin_x: i32, origin_y: i32) -> bool {
        let local_x = pix_x - origin_x + self.anchor_x;
        let local_y = pix_y - origin_y + self.anchor_y;
        self.glyph.cell(local_x, local_y)
    }

    /// Classify a pixel against the glyph anchored at `origin`
    pub fn is_sprite_pixel(&self, pix_x: Coord, pix_y: Coord, origin: SpritePosition) -> bool {
        self.hit(pix_x as i32, pix_y as i32, origin.x as i32, origin.y as i32)
    }
}

/// Classify a pixel against an arbitrary glyph using the U glyph's anchor
pub fn is_sprite_pixel(
    pix_x: Coord,
    pix_y: Coord,
    origin_x: Coord,
    origin_y: Coord,
    bitmap: &Bitmap,
) -> bool {
    let sprite = Sprite {
        glyph: *bitmap,
        ..Sprite::default()
    };
    sprite.hit(pix_x as i32, pix_y as i32, origin_x as i32, origin_y as i32)
}

/// Horizontal segment offsets of the player, relative to its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub offsets: [i32; 3],
}

impl PlayerLayout {
    /// Current layout: segments at +0, +17, +27
    pub const STANDARD: PlayerLayout = PlayerLayout {
        offsets: [0, SECOND_SEGMENT_OFFSET, THIRD_SEGMENT_OFFSET],
    };

    /// Earlier layout where the third segment sits at +10, overlapping the first
    pub const LEGACY: PlayerLayout = PlayerLayout {
        offsets: [0, SECOND_SEGMENT_OFFSET, LEGACY_THIRD_SEGMENT_OFFSET],
    };
}

impl Default for PlayerLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Three copies of one sprite side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pub sprite: Sprite,
    pub layout: PlayerLayout,
}

impl Player {
    pub fn new(layout: PlayerLayout) -> Self {
        Self {
            sprite: Sprite::default(),
            layout,
        }
    }

    /// Which segments claim the pixel, in layout order
    pub fn segment_hits(&self, pix_x: Coord, pix_y: Coord, origin: SpritePosition) -> [bool; 3] {
        let (x, y) = (pix_x as i32, pix_y as i32);
        let (ox, oy) = (origin.x as i32, origin.y as i32);
        self.layout
            .offsets
            .map(|dx| self.sprite.hit(x, y, ox + dx, oy))
    }

    /// Classify a pixel against the player: the OR of its segments
    pub fn is_player_pixel(&self, pix_x: Coord, pix_y: Coord, origin: SpritePosition) -> bool {
        self.segment_hits(pix_x, pix_y, origin).iter().any(|&hit| hit)
    }
}
