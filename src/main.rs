//! # Draw Circle
//!
//! Opens the "Circle" window. Press the left mouse button and drag to draw an
//! ellipse inside the box spanned by the press point and the cursor.
//!
//! ## Usage
//! Run with `cargo run --release`; `--help` lists the optional overrides.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{error, info};

use draw_circle::config::{Args, Config};
use draw_circle::logging;

fn main() {
    let args = Args::parse();
    logging::init(args.debug);
    let exit_code = match run(args) {
        Ok(code) => code,
        Err(err) => {
            // Release builds have no console, so stderr only shows when redirected.
            error!("{err:#}");
            eprintln!("{} {:#}", "error:".red().bold(), err);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(args: Args) -> Result<i32> {
    let config = Config::try_from(args).context("invalid arguments")?;
    info!(title = %config.title, "starting");
    launch(config)
}

#[cfg(all(windows, feature = "gui"))]
fn launch(config: Config) -> Result<i32> {
    draw_circle::gui::run_gui(config).context("window startup failed")
}

#[cfg(not(all(windows, feature = "gui")))]
fn launch(_config: Config) -> Result<i32> {
    Err(draw_circle::StartupError::Unsupported.into())
}
