//! VGA Pixel Engine Library
//!
//! Pure per-pixel classifiers for a small VGA demo scene: a scrolling bar
//! field driven by an amplitude LUT, a movable U-shaped sprite (and the
//! three-segment player built from it), and a magnified static glyph.
//! Each classifier answers "does this primitive draw pixel (x, y)?" from
//! its parameters and a snapshot of the frame registers. A compositor,
//! an animation driver and an SDL2 viewer sit on top.

pub mod common;
pub mod sine_lut;
pub mod bitmap;
pub mod bar;
pub mod sprite;
pub mod pattern;
pub mod shape;
pub mod frame;
pub mod compositor;
pub mod gamepad;
pub mod config;
pub mod engine;
pub mod ui;
