//! vgapix - Entry Point
//!
//! Parses the command line, then either opens the SDL2 viewer or runs the
//! frame driver headless.

use anyhow::Context;
use log::{error, info};
use std::env;
use std::process;

use vgapix::config::{Config, USAGE};
use vgapix::engine::Engine;
use vgapix::ui::Ui;

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };
    info!("Configuration: {:?}", config);

    let mut engine = Engine::new(&config);

    if config.headless {
        engine.run().context("Headless run failed")?;
        return Ok(());
    }

    let mut ui = Ui::new(config.scale)
        .map_err(anyhow::Error::msg)
        .context("Failed to initialize SDL2 window")?;
    ui.run(&mut engine)
        .map_err(anyhow::Error::msg)
        .context("Viewer stopped with an error")?;

    info!("Exited after {} frames", engine.current_frame());
    Ok(())
}
