//! CLI module
//!
//! Command-line interface over the explorer core.
//!
//! # Commands
//!
//! - `grid` - Periodic grid with highlight and search overlays
//! - `element` - One element's record
//! - `compounds` - One page of an element's compounds
//! - `window` - Page window tokens
//! - `resize` - Page after a rows-per-page change
//! - `classify` - Category code to classification
//! - `decode` - Query string to explorer state
//! - `classifications` - Every classification bucket

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{load_cli_config, render_table, Runner};
