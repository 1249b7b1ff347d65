//! Engine
//!
//! The frame driver: owns the animation registers, the compositor stack and
//! the video buffer, and produces one composed frame per `run_frame` call.

use log::info;

use crate::common::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::compositor::{Compositor, RenderError};
use crate::config::{Config, DEFAULT_HEADLESS_FRAMES};
use crate::frame::{AnimationController, FrameState};
use crate::gamepad::{Button, Gamepad};
use crate::shape::Layer;

/// Driver run state
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// Animation is frozen
    pub paused: bool,
    /// Engine is running
    pub running: bool,
    /// Request to terminate
    pub die: bool,
    /// Frames produced so far
    pub frames: u64,
}

impl Default for EngineContext {
    fn default() -> Self {
        Self {
            paused: false,
            running: true,
            die: false,
            frames: 0,
        }
    }
}

/// Main engine structure
pub struct Engine {
    /// Engine context/state
    pub ctx: EngineContext,
    /// Register owner
    pub animation: AnimationController,
    /// Layer stack
    pub compositor: Compositor,
    /// Input state
    pub gamepad: Gamepad,
    /// Last composed frame (640x480 ARGB)
    video_buffer: Vec<u32>,
    /// Stop after this many frames
    frame_limit: Option<u64>,
}

impl Engine {
    /// Create an engine from configuration
    pub fn new(config: &Config) -> Self {
        info!(
            "Player layout {:?}, scroll step {} px/frame",
            config.player_layout.offsets, config.scroll_step
        );

        let initial = FrameState::new(0, config.origin);

        Self {
            ctx: EngineContext::default(),
            animation: AnimationController::new(initial, config.scroll_step, config.sprite_speed),
            compositor: Compositor::new(config.player_layout),
            gamepad: Gamepad::new(),
            video_buffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
            frame_limit: config.frame_limit,
        }
    }

    /// Advance the registers (unless paused) and compose the next frame
    pub fn run_frame(&mut self) -> Result<FrameState, RenderError> {
        if self.gamepad.take_pause_request() {
            self.toggle_pause();
            info!("{}", if self.ctx.paused { "Paused" } else { "Resumed" });
        }

        let frame = if self.ctx.paused {
            self.animation.state()
        } else {
            self.animation.advance(&self.gamepad)
        };

        self.compositor.render(&frame, &mut self.video_buffer)?;
        self.ctx.frames += 1;

        if let Some(limit) = self.frame_limit {
            if self.ctx.frames >= limit {
                self.stop();
            }
        }

        Ok(frame)
    }

    /// Pause the animation
    pub fn pause(&mut self) {
        self.ctx.paused = true;
    }

    /// Resume the animation
    pub fn resume(&mut self) {
        self.ctx.paused = false;
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.ctx.paused = !self.ctx.paused;
    }

    /// Stop the engine
    pub fn stop(&mut self) {
        self.ctx.die = true;
        self.ctx.running = false;
    }

    /// Get the video buffer for rendering
    pub fn get_video_buffer(&self) -> &[u32] {
        &self.video_buffer
    }

    /// Set button state
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.gamepad.set_button(button, pressed);
    }

    /// Check if engine is running
    pub fn is_running(&self) -> bool {
        self.ctx.running && !self.ctx.die
    }

    /// Check if engine is paused
    pub fn is_paused(&self) -> bool {
        self.ctx.paused
    }

    /// Get current frame number
    pub fn current_frame(&self) -> u64 {
        self.ctx.frames
    }

    /// Per-layer pixel counts of the current register snapshot
    pub fn coverage(&self) -> Vec<(Layer, usize)> {
        self.compositor.coverage(&self.animation.state())
    }

    /// Run without a window until the frame limit
    ///
    /// An engine built without a limit stops after `DEFAULT_HEADLESS_FRAMES`.
    pub fn run(&mut self) -> Result<(), RenderError> {
        let limit = *self.frame_limit.get_or_insert(DEFAULT_HEADLESS_FRAMES);
        info!("Starting headless run ({} frames)", limit);

        let mut last = self.animation.state();
        while self.is_running() {
            last = self.run_frame()?;
        }

        info!(
            "Headless run completed. Frames: {}, scroll offset {}, sprite ({}, {})",
            self.current_frame(),
            last.scroll_offset,
            last.sprite.x,
            last.sprite.y
        );
        for (layer, pixels) in self.coverage() {
            info!("  {:<7} {} px", layer.name(), pixels);
        }
        Ok(())
    }
}
