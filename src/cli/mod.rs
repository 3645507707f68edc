//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::{format_announcement, format_summary};
