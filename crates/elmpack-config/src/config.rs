//! The resolved build configuration record.
//!
//! Field names serialize in the shape the bundler reads, so
//! [`BuildConfiguration::to_value`] can be handed over as-is.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::output::{anchor, OutputOptions, SourceMapMode};
use crate::resolver::default_root;
use crate::rule::{ModuleOptions, ModuleRule, ResolveOptions};

/// Entry module the bundle starts from.
pub const DEFAULT_ENTRY: &str = "./src/index.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Loader rules, evaluated in order
    pub module: ModuleOptions,

    /// Extension resolution for imports
    pub resolve: ResolveOptions,

    /// Entry module, relative to the project root
    pub entry: String,

    pub output: OutputOptions,

    pub devtool: SourceMapMode,

    pub dev_server: DevServerOptions,
}

impl BuildConfiguration {
    /// Rules in evaluation order.
    pub fn module_rules(&self) -> &[ModuleRule] {
        &self.module.rules
    }

    /// Extensions in resolution order.
    pub fn resolvable_extensions(&self) -> &[String] {
        &self.resolve.extensions
    }

    /// First rule that applies to `path`, if any.
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// let config = elmpack_config::resolve();
    /// let rule = config.rule_for(Path::new("src/Main.elm")).unwrap();
    /// assert_eq!(rule.loader, "elm-webpack-loader");
    /// assert!(config.rule_for(Path::new("src/index.js")).is_none());
    /// ```
    pub fn rule_for(&self, path: &Path) -> Option<&ModuleRule> {
        self.module.rule_for(path)
    }

    /// Convert to the bundler's JSON document.
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            ConfigError::invalid("config", "<record>", format!("serialization failed: {e}"))
        })
    }

    /// Read a record back from the bundler's JSON document.
    ///
    /// A relative `output.path` is anchored on the default root, the same
    /// way [`crate::resolve`] anchors its own output directory.
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let mut config: Self = serde_json::from_value(value).map_err(|e| {
            ConfigError::invalid("config", "<document>", format!("not a build configuration: {e}"))
        })?;

        config.output.path = anchor(&default_root(), &config.output.path);
        Ok(config)
    }
}
