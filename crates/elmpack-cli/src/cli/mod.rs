//! Command-line interface definition for elmpack.
//!
//! # Command Structure
//!
//! - `elmpack print` - Print the resolved configuration
//! - `elmpack check` - Validate the configuration against the project
//! - `elmpack match` - Show which loader handles a file
//! - `elmpack candidates` - List the paths tried for an import

mod commands;
pub mod enums;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CandidatesArgs, CheckArgs, Command, MatchArgs, PrintArgs};
pub use enums::*;

/// elmpack - build configuration for Elm + JavaScript bundles
#[derive(Parser, Debug)]
#[command(
    name = "elmpack",
    version,
    about = "Build configuration for Elm + JavaScript bundles",
    long_about = "elmpack resolves the configuration an external bundler and dev server use\n\
                  to compile Elm sources into a browser bundle: loader rules, extension\n\
                  resolution, entry and output paths, source maps, and dev-server binding."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// TOML file with overrides (defaults to ./elmpack.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root that relative paths are resolved against
    #[arg(short, long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
