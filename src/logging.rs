//! Logging setup.
//!
//! The interactive game owns the terminal, so it only logs when a log file is
//! given. The headless runner logs to stderr, keeping stdout for the report.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::level_filters::LevelFilter;

use crate::config::{Mode, Settings};

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber for this run, if any.
pub fn init(settings: &Settings) -> Result<()> {
    let level = level_for(settings.verbosity);

    if let Some(path) = &settings.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        return tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_max_level(level)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}"));
    }

    match settings.mode {
        Mode::Headless { .. } => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_max_level(level)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}")),
        Mode::Play => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(1), LevelFilter::INFO);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }
}
