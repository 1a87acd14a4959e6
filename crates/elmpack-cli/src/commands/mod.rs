//! Command implementations for the elmpack CLI.
//!
//! - [`print`] - Print the resolved configuration
//! - [`check`] - Validate the configuration
//! - [`inspect`] - Rule matching and extension candidates
//!
//! Each command exposes an `execute` function taking the shared [`Context`]
//! and its parsed arguments.

pub mod check;
pub mod inspect;
pub mod print;

use std::path::{Path, PathBuf};

use elmpack_config::overrides::OVERRIDES_FILE;
use elmpack_config::{BuildConfiguration, ConfigOverrides, ConfigResolver};

use crate::cli::Cli;
use crate::error::{CliError, Result};

pub use check::execute as check_execute;
pub use inspect::{candidates as candidates_execute, matches as match_execute};
pub use print::execute as print_execute;

/// State shared by every command: the resolver built from global flags.
#[derive(Debug)]
pub struct Context {
    resolver: ConfigResolver,
}

impl Context {
    /// Build the resolver from `--root` and `--config`.
    ///
    /// Without `--root` the project root is the working directory. Without
    /// `--config`, `elmpack.toml` in the project root is used when present.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => absolute(root)?,
            None => std::env::current_dir()?,
        };

        let overrides_file = match &cli.config {
            Some(path) if !path.is_file() => return Err(CliError::FileNotFound(path.clone())),
            Some(path) => Some(path.clone()),
            None => {
                let default_path = root.join(OVERRIDES_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        let overrides = ConfigOverrides::load(overrides_file.as_deref())?;
        Ok(Self::new(ConfigResolver::at(root).with_overrides(overrides)))
    }

    pub fn new(resolver: ConfigResolver) -> Self {
        Self { resolver }
    }

    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    pub fn resolve(&self) -> BuildConfiguration {
        self.resolver.resolve()
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
