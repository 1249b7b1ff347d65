//! Compositor
//!
//! Stacks shapes in priority order and rasterizes full frames. The first
//! layer that covers a pixel owns it; each layer paints a single color.

use thiserror::Error;

use crate::bar::BarLayout;
use crate::common::{Coord, Pixel, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::frame::FrameState;
use crate::pattern::StaticPattern;
use crate::shape::{Layer, Shape};
use crate::sprite::{Player, PlayerLayout};

/// Color of pixels no layer claims
pub const BACKGROUND: u32 = 0xFF000000;

/// Frame rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Output buffer does not hold exactly one frame
    #[error("frame buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Default ARGB color per layer kind
pub fn layer_color(layer: Layer) -> u32 {
    match layer {
        Layer::Player => 0xFFFFD800,
        Layer::Sprite => 0xFFFF8000,
        Layer::Bar => 0xFF3050FF,
        Layer::StaticPattern => 0xFF30C040,
    }
}

/// Priority-ordered stack of shapes
#[derive(Debug, Clone)]
pub struct Compositor {
    layers: Vec<Shape>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(PlayerLayout::default())
    }
}

impl Compositor {
    /// Standard stack: player over bars over the static pattern
    pub fn new(player_layout: PlayerLayout) -> Self {
        Self::with_layers(vec![
            Shape::from(Player::new(player_layout)),
            Shape::from(BarLayout::default()),
            Shape::from(StaticPattern::default()),
        ])
    }

    /// Custom stack, highest priority first
    pub fn with_layers(layers: Vec<Shape>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Shape] {
        &self.layers
    }

    /// Highest-priority layer owning the pixel, if any
    pub fn classify(&self, pixel: Pixel, frame: &FrameState) -> Option<Layer> {
        self.layers
            .iter()
            .find(|shape| shape.covers(pixel, frame))
            .map(Shape::layer)
    }

    /// Whether any layer draws the pixel
    pub fn covers(&self, pixel: Pixel, frame: &FrameState) -> bool {
        self.layers.iter().any(|shape| shape.covers(pixel, frame))
    }

    /// Rasterize one frame into `buffer` (row-major ARGB)
    pub fn render(&self, frame: &FrameState, buffer: &mut [u32]) -> Result<(), RenderError> {
        let expected = SCREEN_WIDTH * SCREEN_HEIGHT;
        if buffer.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        // Bounds only depend on the snapshot, so compute them once per frame
        let bounds: Vec<Rect> = self.layers.iter().map(|shape| shape.bounds(frame)).collect();

        for (y, row) in buffer.chunks_exact_mut(SCREEN_WIDTH).enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                let pixel = Pixel::new(x as Coord, y as Coord);
                *out = self
                    .layers
                    .iter()
                    .zip(&bounds)
                    .find(|(shape, rect)| rect.contains(x as i32, y as i32) && shape.covers(pixel, frame))
                    .map(|(shape, _)| layer_color(shape.layer()))
                    .unwrap_or(BACKGROUND);
            }
        }

        Ok(())
    }

    /// Number of pixels each layer owns in a frame, in stack order
    pub fn coverage(&self, frame: &FrameState) -> Vec<(Layer, usize)> {
        let mut counts: Vec<(Layer, usize)> = self.layers.iter().map(|shape| (shape.layer(), 0)).collect();

        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let pixel = Pixel::new(x as Coord, y as Coord);
                if let Some(index) = self.layers.iter().position(|shape| shape.covers(pixel, frame)) {
                    counts[index].1 += 1;
                }
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SpritePosition;

    fn frame() -> FrameState {
        FrameState::new(0, SpritePosition::new(200, 100))
    }

    #[test]
    fn test_default_stack_order() {
        let compositor = Compositor::default();
        let layers: Vec<Layer> = compositor.layers().iter().map(Shape::layer).collect();
        assert_eq!(layers, vec![Layer::Player, Layer::Bar, Layer::StaticPattern]);
    }

    #[test]
    fn test_classify() {
        let compositor = Compositor::default();
        let frame = frame();

        assert_eq!(compositor.classify(Pixel::new(195, 90), &frame), Some(Layer::Player));
        assert_eq!(compositor.classify(Pixel::new(0, 200), &frame), Some(Layer::Bar));
        assert_eq!(compositor.classify(Pixel::new(258, 18), &frame), Some(Layer::StaticPattern));
        assert_eq!(compositor.classify(Pixel::new(30, 200), &frame), None);
        assert!(!compositor.covers(Pixel::new(30, 200), &frame));
    }

    #[test]
    fn test_player_wins_over_bar() {
        // Park the player inside the bar window on a stripe
        let compositor = Compositor::default();
        let frame = FrameState::new(0, SpritePosition::new(5, 200));
        let pixel = Pixel::new(0, 190);
        assert!(Shape::from(BarLayout::default()).covers(pixel, &frame));
        assert_eq!(compositor.classify(pixel, &frame), Some(Layer::Player));
    }

    #[test]
    fn test_render_matches_classify() {
        let compositor = Compositor::default();
        let frame = FrameState::new(77, SpritePosition::new(300, 250));
        let mut buffer = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        compositor.render(&frame, &mut buffer).unwrap();

        for &(x, y) in &[(0usize, 0usize), (295, 240), (320, 245), (10, 200), (270, 30), (639, 479)] {
            let expected = compositor
                .classify(Pixel::new(x as Coord, y as Coord), &frame)
                .map(layer_color)
                .unwrap_or(BACKGROUND);
            assert_eq!(buffer[y * SCREEN_WIDTH + x], expected, "({}, {})", x, y);
        }
    }

    #[test]
    fn test_render_rejects_wrong_buffer() {
        let compositor = Compositor::default();
        let mut buffer = vec![0u32; 16];
        let err = compositor.render(&frame(), &mut buffer).unwrap_err();
        assert_eq!(
            err,
            RenderError::BufferSize {
                expected: SCREEN_WIDTH * SCREEN_HEIGHT,
                actual: 16
            }
        );
        assert_eq!(err.to_string(), "frame buffer holds 16 pixels, expected 307200");
    }

    #[test]
    fn test_coverage() {
        let compositor = Compositor::default();
        let counts = compositor.coverage(&frame());

        // Player clear of everything else: three glyphs, minus the 13 wall
        // pixels where segments 2 and 3 share column x = 222
        let glyph = crate::bitmap::U_GLYPH.population() as usize;
        assert_eq!(counts[0], (Layer::Player, 3 * glyph - 13));
        // Static pattern untouched by the other layers: 72 set cells of 64 px
        assert_eq!(counts[2], (Layer::StaticPattern, 72 * 64));
        assert!(counts[1].1 > 0);
    }

    #[test]
    fn test_render_idempotent() {
        let compositor = Compositor::default();
        let frame = FrameState::new(123, SpritePosition::new(320, 300));
        let mut first = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        let mut second = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        compositor.render(&frame, &mut first).unwrap();
        compositor.render(&frame, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
