//! TUI module: the portfolio page in a terminal.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `header`, `theme`: Geometry and colors shared by update and view
//! - `run`: Effects (terminal, threads, event loop)

pub mod header;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
