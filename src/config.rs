//! Runtime configuration assembled from command-line arguments.
//!
//! Handles:
//! - Frame rate of the interactive view
//! - Log level and log file location
//!
//! Theme preference is deliberately absent: every run starts light.

use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::error::{Error, Result};

/// Frames per second when no `--fps` is given.
pub const DEFAULT_FPS: u16 = 30;

/// Accepted frame-rate range.
pub const FPS_RANGE: std::ops::RangeInclusive<u16> = 1..=120;

/// Log level when neither `--log-level` nor `RUST_LOG` says otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const APP_DIR: &str = "portfolio-page";
const LOG_FILENAME: &str = "portfolio.log";

/// Settings for the interactive terminal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub fps: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig { fps: DEFAULT_FPS }
    }
}

impl ViewConfig {
    /// Build from an optional `--fps`, clamped to [`FPS_RANGE`].
    pub fn from_args(fps: Option<u16>) -> Self {
        let fps = fps
            .unwrap_or(DEFAULT_FPS)
            .clamp(*FPS_RANGE.start(), *FPS_RANGE.end());
        ViewConfig { fps }
    }

    /// Interval between animation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / u32::from(self.fps.max(1))
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub file: PathBuf,
}

impl LogConfig {
    /// Build from `--log-level` and `--log-file`.
    pub fn from_args(level: &str, file: Option<PathBuf>) -> Result<Self> {
        let level = level
            .parse::<LevelFilter>()
            .map_err(|_| Error::Logging(format!("invalid log level {:?}", level)))?;
        Ok(LogConfig {
            level,
            file: file.unwrap_or_else(default_log_file),
        })
    }
}

/// Default log file: `<cache dir>/portfolio-page/portfolio.log`.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_defaults_and_clamps() {
        assert_eq!(ViewConfig::from_args(None).fps, DEFAULT_FPS);
        assert_eq!(ViewConfig::from_args(Some(0)).fps, 1);
        assert_eq!(ViewConfig::from_args(Some(500)).fps, 120);
        assert_eq!(ViewConfig::from_args(Some(60)).fps, 60);
    }

    #[test]
    fn tick_interval_follows_fps() {
        let config = ViewConfig { fps: 20 };
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let config = LogConfig::from_args("DEBUG", None).unwrap();
        assert_eq!(config.level, LevelFilter::Debug);
        assert!(config.file.ends_with("portfolio-page/portfolio.log"));
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let err = LogConfig::from_args("loud", None).unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = LogConfig::from_args("info", Some(PathBuf::from("/tmp/p.log"))).unwrap();
        assert_eq!(config.file, PathBuf::from("/tmp/p.log"));
    }
}
