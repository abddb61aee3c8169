//! portfolio-page: a single-page personal portfolio with a theme toggle,
//! section navigation and one-shot reveal animations.

pub mod config;
pub mod content;
pub mod dark_mode;
pub mod easing;
pub mod error;
pub mod export;
pub mod layout;
pub mod logging;
pub mod navigator;
pub mod palette;
pub mod reveal;
pub mod tui;
