//! Error types for configuration validation and override loading.
//!
//! Resolution itself cannot fail. These errors surface from the helpers that
//! load overrides, compile patterns, or check a resolved record against the
//! filesystem, and each names the configuration field involved.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("invalid value for '{field}': {value} ({hint})")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    #[error("invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot bind dev server to {host}:{port}")]
    InvalidAddress { host: String, port: u16 },

    #[error("failed to load overrides: {0}")]
    Overrides(#[from] Box<figment::Error>),
}

impl ConfigError {
    pub(crate) fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            hint: hint.into(),
        }
    }

    /// Name of the configuration field this error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::EntryNotFound { .. } => Some("entry"),
            Self::InvalidValue { field, .. } => Some(field),
            Self::InvalidPattern { .. } => Some("module.rules"),
            Self::InvalidAddress { .. } => Some("devServer"),
            Self::Overrides(_) => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Overrides(Box::new(err))
    }
}
