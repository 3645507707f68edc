//! Infrastructure layer - External processes and file system

pub mod cleanup;
pub mod config;
pub mod converter;

pub use cleanup::cleanup;
pub use config::ToolConfig;
pub use converter::{Converter, GamsConverter};
