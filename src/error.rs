//! Error types for gdxsplit

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gdxsplit
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid period identifier: {0}")]
    InvalidPeriod(String),

    #[error("Converter error: {0}")]
    Converter(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl SplitError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitError::SourceNotFound(_) => 2,
            SplitError::InvalidPeriod(_) => 3,
            SplitError::Converter(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SplitError::SourceNotFound(path) => {
                format!(
                    "Source file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path and file name (e.g., data/FP_20090101.gdx)\n\
                    • Paths are resolved relative to the current directory",
                    path.display()
                )
            }
            SplitError::InvalidPeriod(period) => {
                format!(
                    "Invalid period identifier: '{}'\n\n\
                    Period identifiers may only contain letters, digits and '_'.\n\n\
                    Examples:\n\
                    gdxsplit FP_20090101.gdx 1 2 3\n\
                    gdxsplit FP_20090101.gdx 24",
                    period
                )
            }
            SplitError::Converter(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that gdxdump and gams are installed\n\
                    • Set GDXSPLIT_GAMS_DIR to the GAMS system directory\n\
                    • Set GDXSPLIT_LAUNCHER (e.g., /usr/bin/wine) if GAMS runs under a compatibility layer",
                    msg
                )
            }
            SplitError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Pass an existing file with --config\n\
                    • Unset GDXSPLIT_CONFIG to use the built-in defaults",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SplitError
pub type Result<T> = std::result::Result<T, SplitError>;
