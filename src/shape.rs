//! Shape Classifier
//!
//! One dispatch point for every primitive. Each variant carries its own
//! parameters; the per-frame registers come in through a `FrameState`
//! snapshot, so a `Shape` itself never changes between frames.

use crate::bar::BarLayout;
use crate::common::{Pixel, Rect};
use crate::frame::FrameState;
use crate::pattern::StaticPattern;
use crate::sprite::{Player, Sprite};

/// Primitive kind, used to tag compositor output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Player,
    Sprite,
    Bar,
    StaticPattern,
}

impl Layer {
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Player => "player",
            Layer::Sprite => "sprite",
            Layer::Bar => "bar",
            Layer::StaticPattern => "static",
        }
    }
}

/// A drawable primitive and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Scrolling bar field, phase taken from `FrameState::scroll_offset`
    Bar(BarLayout),
    /// Single glyph anchored at `FrameState::sprite`
    Sprite(Sprite),
    /// Three glyphs anchored relative to `FrameState::sprite`
    Player(Player),
    /// Magnified glyph at a fixed position
    StaticPattern(StaticPattern),
}

impl Shape {
    pub fn layer(&self) -> Layer {
        match self {
            Shape::Bar(_) => Layer::Bar,
            Shape::Sprite(_) => Layer::Sprite,
            Shape::Player(_) => Layer::Player,
            Shape::StaticPattern(_) => Layer::StaticPattern,
        }
    }

    /// Whether this shape draws the pixel in the given frame
    #[inline]
    pub fn covers(&self, pixel: Pixel, frame: &FrameState) -> bool {
        match self {
            Shape::Bar(bars) => bars.is_bar_pixel(pixel.x, pixel.y, frame.scroll_offset),
            Shape::Sprite(sprite) => sprite.is_sprite_pixel(pixel.x, pixel.y, frame.sprite),
            Shape::Player(player) => player.is_player_pixel(pixel.x, pixel.y, frame.sprite),
            Shape::StaticPattern(pattern) => pattern.is_static_pixel(pixel.x, pixel.y),
        }
    }

    /// Smallest rectangle outside which `covers` is always false
    pub fn bounds(&self, frame: &FrameState) -> Rect {
        match self {
            Shape::Bar(bars) => bars.window,
            Shape::Sprite(sprite) => sprite.footprint(frame.sprite.x as i32, frame.sprite.y as i32),
            Shape::Player(player) => {
                let (ox, oy) = (frame.sprite.x as i32, frame.sprite.y as i32);
                let min = player.layout.offsets.iter().copied().min().unwrap_or(0);
                let max = player.layout.offsets.iter().copied().max().unwrap_or(0);
                let left = player.sprite.footprint(ox + min, oy);
                let right = player.sprite.footprint(ox + max, oy);
                Rect::new(left.left, left.top, right.right, right.bottom)
            }
            Shape::StaticPattern(pattern) => pattern.footprint(),
        }
    }
}

impl From<BarLayout> for Shape {
    fn from(bars: BarLayout) -> Self {
        Shape::Bar(bars)
    }
}

impl From<Sprite> for Shape {
    fn from(sprite: Sprite) -> Self {
        Shape::Sprite(sprite)
    }
}

impl From<Player> for Shape {
    fn from(player: Player) -> Self {
        Shape::Player(player)
    }
}

impl From<StaticPattern> for Shape {
    fn from(pattern: StaticPattern) -> Self {
        Shape::StaticPattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{PlayerLayout, SpritePosition};
    use crate::{bar, pattern, sprite};
    use proptest::prelude::*;

    fn frame() -> FrameState {
        FrameState::new(120, SpritePosition::new(200, 100))
    }

    #[test]
    fn test_layer_tags() {
        assert_eq!(Shape::from(BarLayout::default()).layer(), Layer::Bar);
        assert_eq!(Shape::from(Sprite::default()).layer(), Layer::Sprite);
        assert_eq!(Shape::from(Player::default()).layer(), Layer::Player);
        assert_eq!(Shape::from(StaticPattern::default()).layer(), Layer::StaticPattern);
        assert_eq!(Layer::StaticPattern.name(), "static");
    }

    #[test]
    fn test_player_bounds() {
        let shape = Shape::from(Player::default());
        assert_eq!(shape.bounds(&frame()), Rect::new(195, 90, 233, 106));

        let legacy = Shape::from(Player::new(PlayerLayout::LEGACY));
        assert_eq!(legacy.bounds(&frame()), Rect::new(195, 90, 223, 106));
    }

    #[test]
    fn test_dispatch_reads_frame_registers() {
        let shape = Shape::from(Sprite::default());
        let pixel = Pixel::new(95, 90);
        assert!(shape.covers(pixel, &FrameState::new(0, SpritePosition::new(100, 100))));
        assert!(!shape.covers(pixel, &FrameState::new(0, SpritePosition::new(300, 100))));

        let bars = Shape::from(BarLayout::default());
        let pixel = Pixel::new(0, 300);
        assert!(!bars.covers(pixel, &FrameState::new(25, SpritePosition::default())));
        assert!(bars.covers(pixel, &FrameState::new(0, SpritePosition::default())));
    }

    proptest! {
        #[test]
        fn prop_dispatch_matches_classifiers(x in 0u16..640, y in 0u16..480, offset in 0u32..400) {
            let state = FrameState::new(offset, SpritePosition::new(200, 100));
            let pixel = Pixel::new(x, y);

            prop_assert_eq!(Shape::from(BarLayout::default()).covers(pixel, &state), bar::is_bar_pixel(x, y, offset));
            prop_assert_eq!(
                Shape::from(Sprite::default()).covers(pixel, &state),
                sprite::is_sprite_pixel(x, y, 200, 100, &crate::bitmap::U_GLYPH)
            );
            prop_assert_eq!(Shape::from(StaticPattern::default()).covers(pixel, &state), pattern::is_static_pixel(x, y));
        }

        #[test]
        fn prop_nothing_outside_bounds(x in 0u16..640, y in 0u16..480, offset in 0u32..400, ox in 0u16..640, oy in 0u16..480) {
            let state = FrameState::new(offset, SpritePosition::new(ox, oy));
            let pixel = Pixel::new(x, y);
            let shapes = [
                Shape::from(BarLayout::default()),
                Shape::from(Sprite::default()),
                Shape::from(Player::default()),
                Shape::from(StaticPattern::default()),
            ];
            for shape in shapes {
                if !shape.bounds(&state).contains(x as i32, y as i32) {
                    prop_assert!(!shape.covers(pixel, &state));
                }
            }
        }
    }
}
