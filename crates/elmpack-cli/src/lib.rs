//! elmpack CLI - command-line front end for `elmpack-config`.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand, each exposing `execute`
//! - [`error`] - `CliError` and the miette conversion used by `main`
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status lines on stderr
//!
//! Command output meant for other tools (JSON, TOML, loader names) goes to
//! stdout; status lines and logs go to stderr.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
