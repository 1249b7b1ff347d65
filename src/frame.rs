//! Frame State
//!
//! The two externally owned registers (scroll offset and sprite origin) are
//! bundled into one `Copy` snapshot. Classifiers only ever see a shared
//! reference to a snapshot, so a query cannot observe a register changing
//! halfway through. The animation controller is the single writer.

use log::debug;

use crate::bar::BAR_WIDTH;
use crate::common::{Coord, Offset, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::gamepad::Gamepad;
use crate::sine_lut::SINE_PERIOD;
use crate::sprite::SpritePosition;

/// Scroll distance after which the bar field repeats
pub const SCROLL_PERIOD: Offset = BAR_WIDTH * SINE_PERIOD as Offset;

/// Snapshot of the animation registers for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameState {
    /// Horizontal scroll phase of the bar field
    pub scroll_offset: Offset,
    /// Sprite/player origin
    pub sprite: SpritePosition,
}

impl FrameState {
    pub const fn new(scroll_offset: Offset, sprite: SpritePosition) -> Self {
        Self {
            scroll_offset,
            sprite,
        }
    }
}

/// Owns and advances the frame registers once per frame
#[derive(Debug, Clone)]
pub struct AnimationController {
    state: FrameState,
    /// Scroll pixels added each frame
    pub scroll_step: Offset,
    /// Sprite pixels moved per frame per held direction
    pub sprite_speed: i32,
}

impl AnimationController {
    pub fn new(initial: FrameState, scroll_step: Offset, sprite_speed: i32) -> Self {
        Self {
            state: FrameState {
                scroll_offset: initial.scroll_offset % SCROLL_PERIOD,
                sprite: clamp_origin(initial.sprite.x as i32, initial.sprite.y as i32),
            },
            scroll_step,
            sprite_speed,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Move the registers forward by one frame and return the new snapshot
    pub fn advance(&mut self, gamepad: &Gamepad) -> FrameState {
        let scrolled = self.state.scroll_offset as u64 + self.scroll_step as u64;
        if scrolled >= SCROLL_PERIOD as u64 {
            debug!("Scroll wrapped after {} px", scrolled);
        }
        self.state.scroll_offset = (scrolled % SCROLL_PERIOD as u64) as Offset;

        let (dx, dy) = gamepad.direction();
        if dx != 0 || dy != 0 {
            let sprite = self.state.sprite;
            self.state.sprite = clamp_origin(
                (sprite.x as i32).saturating_add(dx.saturating_mul(self.sprite_speed)),
                (sprite.y as i32).saturating_add(dy.saturating_mul(self.sprite_speed)),
            );
        }

        self.state
    }

    /// Overwrite the sprite origin (clamped onto the screen)
    pub fn set_sprite(&mut self, x: i32, y: i32) {
        self.state.sprite = clamp_origin(x, y);
    }
}

/// Keep the origin itself on screen; the glyph may still hang off an edge
fn clamp_origin(x: i32, y: i32) -> SpritePosition {
    SpritePosition::new(
        x.clamp(0, SCREEN_WIDTH as i32 - 1) as Coord,
        y.clamp(0, SCREEN_HEIGHT as i32 - 1) as Coord,
    )
}
