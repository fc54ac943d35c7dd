//! Crosswise - tic-tac-toe front ends.
//!
//! Wraps [`crosswise_core`] in two presentation layers that share the
//! [`Renderer`] capability:
//!
//! - **Console**: text prompts, moves typed as `x, y`
//! - **TUI**: a full-screen grid driven by keyboard or mouse
//!
//! Settings come from an optional TOML file overridden by command-line flags.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
mod renderer;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use renderer::{Overlay, Renderer, Scene};
