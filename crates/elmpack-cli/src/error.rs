//! Error handling for the elmpack CLI.
//!
//! Commands return [`CliError`]; `main` converts it into a miette report with
//! [`cli_error_to_miette`]. Configuration failures carry the name of the field
//! at fault so the report can point at it.

use std::path::PathBuf;

use elmpack_config::ConfigError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Override loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::EntryNotFound { path }) => miette::miette!(
            help = "Create the entry module or override `entry` in elmpack.toml",
            "Entry point not found: {}",
            path.display()
        ),
        CliError::Config(ConfigError::InvalidValue { field, value, hint }) => miette::miette!(
            help = hint,
            "Invalid value for '{}': {}",
            field,
            value
        ),
        CliError::Config(ConfigError::Overrides(e)) => miette::miette!(
            help = "Check elmpack.toml and ELMPACK_* environment variables",
            "Failed to load overrides: {}",
            e
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        other => miette::miette!("{}", other),
    }
}
