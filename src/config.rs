//! Configuration
//!
//! Runtime settings for the animation driver and viewer, parsed from the
//! command line.

use crate::common::{Coord, SCREEN_WIDTH};
use crate::sprite::{PlayerLayout, SpritePosition};

/// Command line usage text
pub const USAGE: &str = "Usage: vgapix [--scroll-step N] [--speed N] [--origin X,Y] \
[--legacy-player] [--scale N] [--frames N] [--headless]";

/// Fastest sprite movement accepted on the command line
pub const MAX_SPRITE_SPEED: i32 = SCREEN_WIDTH as i32;

/// Headless frame limit when none is given
pub const DEFAULT_HEADLESS_FRAMES: u64 = 100;

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scroll pixels added per frame
    pub scroll_step: u32,
    /// Sprite pixels moved per frame per held direction
    pub sprite_speed: i32,
    /// Sprite origin on the first frame
    pub origin: SpritePosition,
    /// Horizontal offsets of the three player segments
    pub player_layout: PlayerLayout,
    /// Window scale factor
    pub scale: u32,
    /// Stop after this many frames
    pub frame_limit: Option<u64>,
    /// Run without opening a window
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_step: 4,
            sprite_speed: 2,
            origin: SpritePosition::new(200, 100),
            player_layout: PlayerLayout::STANDARD,
            scale: 1,
            frame_limit: None,
            headless: false,
        }
    }
}

impl Config {
    /// Parse arguments (program name already stripped)
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--scroll-step" => config.scroll_step = parse_value(arg, args.next())?,
                "--speed" => {
                    config.sprite_speed = parse_value(arg, args.next())?;
                    if !(1..=MAX_SPRITE_SPEED).contains(&config.sprite_speed) {
                        return Err(format!("--speed must be within 1..={}", MAX_SPRITE_SPEED));
                    }
                }
                "--origin" => config.origin = parse_origin(args.next())?,
                "--legacy-player" => config.player_layout = PlayerLayout::LEGACY,
                "--scale" => {
                    config.scale = parse_value(arg, args.next())?;
                    if config.scale == 0 {
                        return Err("--scale must be at least 1".to_string());
                    }
                }
                "--frames" => config.frame_limit = Some(parse_value(arg, args.next())?),
                "--headless" => config.headless = true,
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }

        if config.headless && config.frame_limit.is_none() {
            // Headless runs need an end
            config.frame_limit = Some(DEFAULT_HEADLESS_FRAMES);
        }

        Ok(config)
    }
}

fn parse_value<T, S>(flag: &str, value: Option<S>) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    S: AsRef<str>,
{
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .as_ref()
        .parse()
        .map_err(|e| format!("Invalid value for {}: {}", flag, e))
}

fn parse_origin<S: AsRef<str>>(value: Option<S>) -> Result<SpritePosition, String> {
    let value = value.ok_or_else(|| "--origin needs a value".to_string())?;
    let (x, y) = value
        .as_ref()
        .split_once(',')
        .ok_or_else(|| format!("Invalid origin '{}', expected X,Y", value.as_ref()))?;
    let x: Coord = parse_value("--origin", Some(x.trim()))?;
    let y: Coord = parse_value("--origin", Some(y.trim()))?;
    Ok(SpritePosition::new(x, y))
}
