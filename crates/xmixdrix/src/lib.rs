//! X Mix Drix terminal front end.
//!
//! Draws the board, maps keys and clicks to cell indices, and hands them to
//! the [`xmixdrix_tictactoe`] engine.
//!
//! # Architecture
//!
//! - **tui**: interactive ratatui screen (board, status, New Game)
//! - **replay**: headless move replay, text or JSON output
//! - **config**: TOML settings (title, marks, log file)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod status;
pub mod tui;

pub use config::{Config, ConfigError};
