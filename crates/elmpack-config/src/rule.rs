//! Module rules and import extension resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pattern::FilePattern;

/// Loader that compiles Elm modules for the bundler.
pub const ELM_LOADER: &str = "elm-webpack-loader";

/// Options forwarded to the Elm loader.
///
/// The loader runs with its defaults; no option is recognized yet, so any key
/// in an incoming document is rejected instead of silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElmLoaderOptions {}

/// One entry of `module.rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Files the rule applies to
    pub test: FilePattern,

    /// Paths skipped even when `test` matches
    #[serde(default)]
    pub exclude: Vec<FilePattern>,

    /// Name of the loader the bundler invokes
    pub loader: String,

    #[serde(default)]
    pub options: ElmLoaderOptions,
}

impl ModuleRule {
    /// The Elm rule: `*.elm`, skipping build artifacts and installed packages.
    pub fn elm() -> Self {
        Self {
            test: FilePattern::from_static(r"\.elm$"),
            exclude: vec![
                FilePattern::from_static("elm-stuff"),
                FilePattern::from_static("node_modules"),
            ],
            loader: ELM_LOADER.to_string(),
            options: ElmLoaderOptions::default(),
        }
    }

    /// Whether `path` matches `test` and none of the `exclude` patterns.
    pub fn matches(&self, path: &Path) -> bool {
        self.test.is_match(path) && !self.is_excluded(path)
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.iter().any(|pattern| pattern.is_match(path))
    }
}

/// `module` section: ordered rules, first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
}

impl ModuleOptions {
    /// First rule that applies to `path`.
    pub fn rule_for(&self, path: &Path) -> Option<&ModuleRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }
}

/// `resolve` section: suffixes tried when an import omits its extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".elm".to_string(), ".js".to_string()],
        }
    }
}

impl ResolveOptions {
    /// Paths the bundler tries for `specifier`, in order.
    ///
    /// A specifier that already ends in a known extension is tried as-is.
    ///
    /// ```
    /// use elmpack_config::ResolveOptions;
    ///
    /// let resolve = ResolveOptions::default();
    /// assert_eq!(resolve.candidates("./Main"), vec!["./Main.elm", "./Main.js"]);
    /// assert_eq!(resolve.candidates("./index.js"), vec!["./index.js"]);
    /// ```
    pub fn candidates(&self, specifier: &str) -> Vec<String> {
        if self.extensions.iter().any(|ext| specifier.ends_with(ext.as_str())) {
            return vec![specifier.to_string()];
        }

        self.extensions
            .iter()
            .map(|ext| format!("{specifier}{ext}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elm_rule_matches_elm_sources() {
        let rule = ModuleRule::elm();
        assert!(rule.matches(Path::new("Main.elm")));
        assert!(rule.matches(Path::new("/project/src/Page/Home.elm")));
        assert!(!rule.matches(Path::new("Main.js")));
        assert!(!rule.matches(Path::new("Main.elm.js")));
    }

    #[test]
    fn elm_rule_skips_excluded_directories() {
        let rule = ModuleRule::elm();
        assert!(!rule.matches(Path::new("/project/elm-stuff/0.19.1/Main.elm")));
        assert!(!rule.matches(Path::new("/project/node_modules/pkg/Main.elm")));
        assert!(rule.is_excluded(Path::new("node_modules/left-pad/index.js")));
    }

    #[test]
    fn first_matching_rule_wins() {
        let mut second = ModuleRule::elm();
        second.loader = "other-loader".to_string();
        let module = ModuleOptions {
            rules: vec![ModuleRule::elm(), second],
        };

        let rule = module.rule_for(Path::new("src/Main.elm")).unwrap();
        assert_eq!(rule.loader, ELM_LOADER);
        assert!(module.rule_for(Path::new("src/index.js")).is_none());
    }

    #[test]
    fn loader_options_reject_unknown_keys() {
        let result: Result<ElmLoaderOptions, _> =
            serde_json::from_value(serde_json::json!({ "debug": true }));
        assert!(result.is_err());

        let empty: ElmLoaderOptions = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty, ElmLoaderOptions::default());
    }

    #[test]
    fn candidates_follow_extension_order() {
        let resolve = ResolveOptions::default();
        assert_eq!(
            resolve.candidates("./Page/Home"),
            vec!["./Page/Home.elm".to_string(), "./Page/Home.js".to_string()]
        );
        assert_eq!(resolve.candidates("./Main.elm"), vec!["./Main.elm".to_string()]);
    }

    #[test]
    fn candidates_empty_without_extensions() {
        let resolve = ResolveOptions { extensions: vec![] };
        assert!(resolve.candidates("./Main").is_empty());
    }
}
