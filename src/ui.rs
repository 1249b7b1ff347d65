//! SDL2 User Interface
//!
//! This module presents composed frames in an SDL2 window and forwards
//! keyboard input to the engine.

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use std::time::{Duration, Instant};

use crate::common::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::Engine;
use crate::gamepad::Button;

/// Target refresh rate
pub const FRAME_RATE: f64 = 60.0;

/// SDL2 UI wrapper
pub struct Ui {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture_creator: TextureCreator<WindowContext>,
}

impl Ui {
    /// Create a new UI instance with the window scaled by `scale`
    pub fn new(scale: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(
                "vgapix",
                SCREEN_WIDTH as u32 * scale,
                SCREEN_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        // Prefer software renderer for compatibility/performance on systems where
        // accelerated backends are unavailable or unstable.
        let canvas = window
            .into_canvas()
            .software()
            .build()
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        info!("Window opened at {}x scale", scale);

        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
        })
    }

    /// Run the engine with UI
    pub fn run(&mut self, engine: &mut Engine) -> Result<(), String> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(
                PixelFormatEnum::ARGB8888,
                SCREEN_WIDTH as u32,
                SCREEN_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let frame_duration = Duration::from_secs_f64(1.0 / FRAME_RATE);

        'running: loop {
            let frame_start = Instant::now();

            // Handle events
            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    Event::KeyDown { keycode: Some(key), .. } => {
                        if key == Keycode::Escape {
                            break 'running;
                        }
                        if let Some(button) = keycode_to_button(key) {
                            engine.set_button(button, true);
                        }
                    }
                    Event::KeyUp { keycode: Some(key), .. } => {
                        if let Some(button) = keycode_to_button(key) {
                            engine.set_button(button, false);
                        }
                    }
                    _ => {}
                }
            }

            let frame = engine.run_frame().map_err(|e| e.to_string())?;
            debug!(
                "Frame {}: scroll {}, sprite ({}, {})",
                engine.current_frame(),
                frame.scroll_offset,
                frame.sprite.x,
                frame.sprite.y
            );

            // Update texture with video buffer
            let video_buffer = engine.get_video_buffer();
            texture
                .update(
                    None,
                    unsafe {
                        std::slice::from_raw_parts(
                            video_buffer.as_ptr() as *const u8,
                            video_buffer.len() * 4,
                        )
                    },
                    SCREEN_WIDTH * 4,
                )
                .map_err(|e| e.to_string())?;

            // Render
            self.canvas.clear();
            self.canvas.copy(&texture, None, None)?;
            self.canvas.present();

            if !engine.is_running() {
                break 'running;
            }

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            }
        }

        Ok(())
    }
}

/// Convert SDL2 keycode to an engine button
fn keycode_to_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Left => Some(Button::Left),
        Keycode::Right => Some(Button::Right),
        Keycode::Space => Some(Button::Start),
        _ => None,
    }
}
