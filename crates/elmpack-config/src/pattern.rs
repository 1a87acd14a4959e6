//! Regex-backed file patterns used by module rules.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// A compiled regular expression tested against a module's path.
///
/// Two patterns are equal when their source text is equal. Serializes as the
/// source text, which is what the bundler expects in `test`/`exclude`.
#[derive(Clone)]
pub struct FilePattern {
    regex: Regex,
}

impl FilePattern {
    /// Compile a pattern from its regex source.
    ///
    /// # Example
    ///
    /// ```
    /// use elmpack_config::FilePattern;
    /// use std::path::Path;
    ///
    /// let pattern = FilePattern::new(r"\.elm$").unwrap();
    /// assert!(pattern.is_match(Path::new("src/Main.elm")));
    /// assert!(!pattern.is_match(Path::new("src/index.js")));
    /// ```
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|source_err| ConfigError::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self { regex })
    }

    pub(crate) fn from_static(source: &'static str) -> Self {
        Self {
            regex: Regex::new(source).expect("built-in pattern compiles"),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Test the pattern against the path's string form.
    pub fn is_match(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FilePattern {}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        FilePattern::new(&source).map_err(serde::de::Error::custom)
    }
}
