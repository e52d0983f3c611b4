//! Maze Forge Application Library
//!
//! This crate contains the configuration, setup, rendering
//! and utilities for the Maze Forge command line tool.

pub mod benchmark;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod setup;

pub use config::AppConfig;
pub use error::AppError;

use clap::Parser;
use config::Settings;
use std::io;

/// Parses the command line, resolves settings and runs the selected mode.
pub fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::init_logger(&config);

    log::info!("Maze Forge starting");
    log::debug!("Loaded Config: {:?}", config);

    let file_settings = config::load_file_settings(config.config.as_deref())?;
    let settings = Settings::resolve(&config, file_settings);

    let side_length = match settings.size {
        Some(size) => input::validate_size(size),
        None if config.no_prompt => input::DEFAULT_SIZE,
        None => input::prompt_for_size(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Maze size {}, seed {}", side_length, seed);

    if let Some(runs) = settings.benchmark_runs {
        setup::execution::run_benchmark_mode(&settings, runs, side_length, seed)?;
    } else {
        let stdout = io::stdout();
        let report =
            setup::execution::run_standard_mode(&settings, side_length, seed, &mut stdout.lock())?;
        log::debug!("Run report: {:?}", report);
    }

    log::info!("Maze Forge finished.");
    Ok(())
}
