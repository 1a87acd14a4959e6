//! Build configuration resolution for Elm + JavaScript bundles.
//!
//! [`resolve`] produces the fixed development profile: one Elm loader rule,
//! `.elm`/`.js` extension resolution, `./src/index.js` as the entry, a
//! `dist/` output directory anchored on this crate's location, full source
//! maps, and a dev server bound to every interface on port 3000.
//!
//! ```
//! let config = elmpack_config::resolve();
//! assert_eq!(config.entry, "./src/index.js");
//! assert!(config.output.path.is_absolute());
//! assert_eq!(config.dev_server.port, 3000);
//! ```
//!
//! Consumers that need a different project root or explicit overrides use
//! [`ConfigResolver`] directly. Validation is separate from resolution; see
//! [`validation`].

pub mod config;
pub mod dev;
pub mod error;
pub mod output;
pub mod overrides;
pub mod pattern;
pub mod resolver;
pub mod rule;
pub mod validation;

pub use config::*;
pub use dev::*;
pub use error::*;
pub use output::*;
pub use overrides::{ConfigOverrides, DevServerOverrides, OutputOverrides};
pub use pattern::FilePattern;
pub use resolver::{resolve, ConfigResolver};
pub use rule::*;

pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
