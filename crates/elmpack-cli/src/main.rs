//! elmpack CLI - resolve, print, and check the Elm bundle configuration.
//!
//! Handles argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use elmpack_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let ctx = commands::Context::from_cli(&args).map_err(error::cli_error_to_miette)?;

    let result = match &args.command {
        cli::Command::Print(print_args) => commands::print_execute(&ctx, print_args),
        cli::Command::Check(check_args) => commands::check_execute(&ctx, check_args),
        cli::Command::Match(match_args) => commands::match_execute(&ctx, match_args),
        cli::Command::Candidates(candidates_args) => {
            commands::candidates_execute(&ctx, candidates_args)
        }
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
