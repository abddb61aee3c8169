//! Logger setup.
//!
//! The interactive view owns the terminal, so log records go to a file
//! rather than stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, OpenOptions};

use env_logger::{Builder, Target};

use crate::config::LogConfig;
use crate::error::{Error, Result};

/// Install the global logger. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    Builder::new()
        .filter_level(config.level)
        .parse_env("RUST_LOG")
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    log::info!("logging to {}", config.file.display());
    Ok(())
}
