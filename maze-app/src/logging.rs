//! Logging setup for the application.

use crate::config::{AppConfig, GlobalLogLevel};
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Maps the command line level onto the `log` facade's filter.
pub fn level_filter(level: GlobalLogLevel) -> LevelFilter {
    match level {
        GlobalLogLevel::Trace => LevelFilter::Trace,
        GlobalLogLevel::Debug => LevelFilter::Debug,
        GlobalLogLevel::Info => LevelFilter::Info,
        GlobalLogLevel::Warn => LevelFilter::Warn,
        GlobalLogLevel::Error => LevelFilter::Error,
    }
}

/// Initializes the logger.
///
/// `RUST_LOG`, when set, takes precedence so individual modules (for example
/// `maze_core::generator=trace`) can be tuned. Otherwise every module logs at
/// `config.log_level`. Output goes to stderr, keeping stdout for the maze.
pub fn init_logger(config: &AppConfig) {
    let global_level = level_filter(config.log_level);

    let mut builder = if std::env::var_os("RUST_LOG").is_some() {
        Builder::from_env(Env::default())
    } else {
        let mut builder = Builder::new();
        builder.filter_level(global_level);
        builder
    };

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping the existing one");
        return;
    }

    log::debug!(
        "Logger initialized with global log level: {:?}",
        config.log_level
    );
}
