//! Setup for the application logging.
//!
//! Diagnostic logs are redirected to the standard error so the standard
//! output only carries the connectivity report. The level is chosen with the
//! `--log-level` option:
//!
//! - `off` (default, no subscriber is installed)
//! - `error`
//! - `warn`
//! - `info`
//! - `debug`
//! - `trace`
use std::sync::Once;

use clap::ValueEnum;
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

#[derive(ValueEnum, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy, Default)]
pub enum LogLevel {
    /// A threshold lower than all security levels.
    #[default]
    Off,
    /// Corresponds to the `Error` security level.
    Error,
    /// Corresponds to the `Warn` security level.
    Warn,
    /// Corresponds to the `Info` security level.
    Info,
    /// Corresponds to the `Debug` security level.
    Debug,
    /// Corresponds to the `Trace` security level.
    Trace,
}

/// It redirects the log info to the standard error with the given level.
///
/// Only the first call installs a subscriber.
pub fn setup(log_level: LogLevel) {
    let filter = map_to_level_filter(log_level);

    if filter == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        stderr_init(filter);
    });
}

fn map_to_level_filter(log_level: LogLevel) -> LevelFilter {
    match log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn stderr_init(filter: LevelFilter) {
    let () = tracing_subscriber::fmt()
        .compact()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("logging initialized");
}
