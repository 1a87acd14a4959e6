//! Output location and source map settings.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Where the bundle is written and served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Bundle file name
    pub filename: String,

    /// Absolute output directory
    pub path: PathBuf,

    /// URL prefix the dev server serves the bundle under
    pub public_path: String,
}

impl OutputOptions {
    /// Build output options, anchoring a relative `dir` on `root`.
    ///
    /// `root` must already be absolute; the joined path is normalized
    /// lexically, so `..` segments never survive into the record.
    ///
    /// ```
    /// use elmpack_config::OutputOptions;
    /// use std::path::Path;
    ///
    /// let output = OutputOptions::anchored(Path::new("/srv/app"), "dist", "index.js", "/dist");
    /// assert_eq!(output.path, Path::new("/srv/app/dist"));
    /// ```
    pub fn anchored(
        root: &Path,
        dir: impl AsRef<Path>,
        filename: impl Into<String>,
        public_path: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            path: anchor(root, dir.as_ref()),
            public_path: public_path.into(),
        }
    }

    /// Full path of the emitted bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.path.join(&self.filename)
    }

    /// URL the bundle is served at, e.g. `/dist/index.js`.
    pub fn public_url(&self) -> String {
        format!("{}/{}", self.public_path.trim_end_matches('/'), self.filename)
    }
}

pub(crate) fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        root.join(path).clean()
    }
}

/// Debug map emission mode (`devtool`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// No source maps
    None,
    /// Modules wrapped in `eval`, no map file
    Eval,
    /// Line-only mappings
    CheapSourceMap,
    /// Map embedded in the bundle as a data URL
    InlineSourceMap,
    /// Map file emitted without a reference comment
    HiddenSourceMap,
    /// Full map file referenced from the bundle
    #[default]
    SourceMap,
}

impl SourceMapMode {
    /// Whether a separate `.map` file is written next to the bundle.
    pub fn emits_map_file(self) -> bool {
        matches!(
            self,
            Self::CheapSourceMap | Self::HiddenSourceMap | Self::SourceMap
        )
    }
}
