//! Pluggable config validation strategies
//!
//! Resolution never validates. These checks let a caller turn a downstream
//! failure into a diagnostic that names the field at fault.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::config::BuildConfiguration;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use elmpack_config::{ConfigValidator, SchemaValidator};
///
/// let config = elmpack_config::resolve();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        if config.module.rules.is_empty() {
            return Err(ConfigError::invalid(
                "module.rules",
                "[]",
                "Add a rule so Elm sources reach a loader",
            ));
        }

        for (index, rule) in config.module.rules.iter().enumerate() {
            if rule.loader.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("module.rules[{index}].loader"),
                    format!("{:?}", rule.loader),
                    "Name the loader the bundler should invoke",
                ));
            }
        }

        validate_extensions(&config.resolve.extensions)?;

        if config.entry.trim().is_empty() {
            return Err(ConfigError::invalid(
                "entry",
                "\"\"",
                "Point entry at the module the bundle starts from",
            ));
        }

        let output = &config.output;
        if !is_plain_file_name(&output.filename) {
            return Err(ConfigError::invalid(
                "output.filename",
                format!("{:?}", output.filename),
                "Use a bare file name; the directory belongs in output.path",
            ));
        }

        if !output.path.is_absolute() {
            return Err(ConfigError::invalid(
                "output.path",
                output.path.display().to_string(),
                "The output directory must be absolute",
            ));
        }

        if !output.public_path.starts_with('/') {
            return Err(ConfigError::invalid(
                "output.publicPath",
                format!("{:?}", output.public_path),
                "Public paths are served from the site root and start with '/'",
            ));
        }

        if config.dev_server.host.trim().is_empty() {
            return Err(ConfigError::invalid(
                "devServer.host",
                "\"\"",
                "Use 0.0.0.0 to listen on every interface",
            ));
        }

        Ok(())
    }
}

fn validate_extensions(extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(ConfigError::invalid(
            "resolve.extensions",
            "[]",
            "List at least one extension, e.g. [\".elm\", \".js\"]",
        ));
    }

    let mut seen = HashSet::new();
    for ext in extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::invalid(
                "resolve.extensions",
                format!("{ext:?}"),
                "Extensions start with a dot, e.g. \".elm\"",
            ));
        }
        if !seen.insert(ext.as_str()) {
            return Err(ConfigError::invalid(
                "resolve.extensions",
                format!("{ext:?}"),
                "Each extension may appear only once",
            ));
        }
    }

    Ok(())
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then requires the entry module to exist under
/// `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        let path = self.root.join(&config.entry);
        if !path.is_file() {
            return Err(ConfigError::EntryNotFound { path });
        }

        tracing::debug!(entry = %path.display(), "entry module found");
        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
///
/// ```no_run
/// use elmpack_config::{validate_fs, ConfigResolver};
///
/// let resolver = ConfigResolver::at("/srv/app");
/// validate_fs(&resolver.resolve(), resolver.root()).unwrap();
/// ```
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
