//! Construction of [`BuildConfiguration`] records.

use std::path::{Path, PathBuf};

use crate::config::{BuildConfiguration, DEFAULT_ENTRY};
use crate::dev::{DevServerOptions, StatsOptions};
use crate::output::{anchor, OutputOptions, SourceMapMode};
use crate::overrides::ConfigOverrides;
use crate::rule::{ModuleOptions, ModuleRule, ResolveOptions};

const OUTPUT_DIR: &str = "dist";
const OUTPUT_FILENAME: &str = "index.js";
const PUBLIC_PATH: &str = "/dist";

/// Directory of this configuration crate, fixed at compile time.
pub(crate) fn default_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Builds fresh [`BuildConfiguration`] records.
///
/// Resolution performs no I/O and never fails. Every call returns a new,
/// independent record; nothing is cached between calls.
///
/// # Example
///
/// ```
/// use elmpack_config::{ConfigOverrides, ConfigResolver};
///
/// let mut overrides = ConfigOverrides::default();
/// overrides.dev_server.port = Some(8000);
///
/// let config = ConfigResolver::at("/srv/app").with_overrides(overrides).resolve();
/// assert_eq!(config.dev_server.port, 8000);
/// assert_eq!(config.output.path, std::path::Path::new("/srv/app/dist"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    root: PathBuf,
    overrides: ConfigOverrides,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self {
            root: default_root(),
            overrides: ConfigOverrides::default(),
        }
    }
}

impl ConfigResolver {
    /// Anchor relative paths on `root` instead of this crate's directory.
    ///
    /// A relative `root` is itself joined onto the default anchor, so the
    /// outcome never depends on the process working directory.
    pub fn at(root: impl AsRef<Path>) -> Self {
        Self {
            root: anchor(&default_root(), root.as_ref()),
            overrides: ConfigOverrides::default(),
        }
    }

    /// Layer explicit overrides over the built-in profile.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Absolute directory relative paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self) -> BuildConfiguration {
        let mut config = self.base();
        if !self.overrides.is_empty() {
            tracing::debug!(overrides = ?self.overrides, "applying configuration overrides");
            self.overrides.apply(&mut config, &self.root);
        }

        tracing::debug!(
            root = %self.root.display(),
            output = %config.output.path.display(),
            "resolved build configuration"
        );
        config
    }

    fn base(&self) -> BuildConfiguration {
        BuildConfiguration {
            module: ModuleOptions {
                rules: vec![ModuleRule::elm()],
            },
            resolve: ResolveOptions::default(),
            entry: DEFAULT_ENTRY.to_string(),
            output: OutputOptions::anchored(&self.root, OUTPUT_DIR, OUTPUT_FILENAME, PUBLIC_PATH),
            devtool: SourceMapMode::SourceMap,
            dev_server: DevServerOptions {
                host: "0.0.0.0".to_string(),
                port: 3000,
                disable_host_check: true,
                stats: StatsOptions { modules: false },
            },
        }
    }
}

/// Resolve the built-in development profile.
///
/// Equivalent to `ConfigResolver::default().resolve()`.
pub fn resolve() -> BuildConfiguration {
    ConfigResolver::default().resolve()
}
