//! Opt-in overrides for the built-in profile.
//!
//! [`crate::resolve`] never reads files or the environment. Callers that want
//! a different host, port, or output location load a [`ConfigOverrides`]
//! explicitly and hand it to [`crate::ConfigResolver::with_overrides`].
//!
//! Sources, lowest priority first:
//! 1. empty defaults (nothing overridden)
//! 2. a TOML file (`--config <path>`, or `elmpack.toml` when present)
//! 3. `ELMPACK_`-prefixed environment variables, `__` separating sections
//!    (`ELMPACK_DEV_SERVER__PORT=4000`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::config::BuildConfiguration;
use crate::error::Result;
use crate::output::{anchor, SourceMapMode};

/// Override file picked up from the working directory.
pub const OVERRIDES_FILE: &str = "elmpack.toml";

/// Environment prefix for override variables.
pub const ENV_PREFIX: &str = "ELMPACK_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<SourceMapMode>,

    pub output: OutputOverrides,

    pub dev_server: DevServerOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Relative paths are anchored on the resolver root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevServerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_host_check: Option<bool>,
}

impl ConfigOverrides {
    /// Load overrides from the file and environment layers.
    ///
    /// With `file == None`, `elmpack.toml` in the working directory is used
    /// when it exists. An explicit file that does not exist is an error.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::figment(file).extract().map_err(Into::into)
    }

    /// The layered figment, exposed for callers that add their own providers.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading overrides file");
                figment = figment.merge(Toml::file_exact(path));
            }
            None => {
                let default_path = Path::new(OVERRIDES_FILE);
                if default_path.exists() {
                    tracing::debug!(path = OVERRIDES_FILE, "loading overrides file");
                    figment = figment.merge(Toml::file(default_path));
                }
            }
        }

        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| is_override_key(key.as_str()))
                .split("__"),
        )
    }

    /// Every overridable field set to its value in `config`.
    ///
    /// Serialized as TOML this is a complete override file: loading it back
    /// and resolving at the same root reproduces `config`.
    pub fn from_config(config: &BuildConfiguration) -> Self {
        Self {
            entry: Some(config.entry.clone()),
            devtool: Some(config.devtool),
            output: OutputOverrides {
                filename: Some(config.output.filename.clone()),
                path: Some(config.output.path.clone()),
                public_path: Some(config.output.public_path.clone()),
            },
            dev_server: DevServerOverrides {
                host: Some(config.dev_server.host.clone()),
                port: Some(config.dev_server.port),
                disable_host_check: Some(config.dev_server.disable_host_check),
            },
        }
    }

    /// Whether no field is overridden.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply(&self, config: &mut BuildConfiguration, root: &Path) {
        if let Some(entry) = &self.entry {
            config.entry = entry.clone();
        }
        if let Some(devtool) = self.devtool {
            config.devtool = devtool;
        }

        let output = &self.output;
        if let Some(filename) = &output.filename {
            config.output.filename = filename.clone();
        }
        if let Some(path) = &output.path {
            config.output.path = anchor(root, path);
        }
        if let Some(public_path) = &output.public_path {
            config.output.public_path = public_path.clone();
        }

        let dev = &self.dev_server;
        if let Some(host) = &dev.host {
            config.dev_server.host = host.clone();
        }
        if let Some(port) = dev.port {
            config.dev_server.port = port;
        }
        if let Some(disable_host_check) = dev.disable_host_check {
            config.dev_server.disable_host_check = disable_host_check;
        }
    }
}

/// Whether an `ELMPACK_` variable (prefix stripped) names an override.
///
/// Other variables sharing the prefix, such as `ELMPACK_LOG`, are ignored
/// rather than tripping the unknown-key check.
fn is_override_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    matches!(key.as_str(), "entry" | "devtool")
        || key.starts_with("output__")
        || key.starts_with("dev_server__")
}
