use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::PrintFormat;

/// Available elmpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration
    ///
    /// JSON output uses the field names the bundler reads and can be piped
    /// straight into it.
    Print(PrintArgs),

    /// Validate the configuration against the project
    ///
    /// Runs the schema checks, then verifies that the entry module exists
    /// under the project root.
    Check(CheckArgs),

    /// Show which loader handles each file
    Match(MatchArgs),

    /// List the paths tried for an import without an extension
    Candidates(CandidatesArgs),
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: PrintFormat,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Print only the overridable fields, in override-file shape
    ///
    /// `elmpack print --format toml --overrides > elmpack.toml` pins the
    /// current values in an override file.
    #[arg(long)]
    pub overrides: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Only run schema checks; skip filesystem lookups
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the match command
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Files to look up
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the candidates command
#[derive(Args, Debug)]
pub struct CandidatesArgs {
    /// Import specifier, e.g. ./Main
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,
}
