//! Check command implementation.
//!
//! Validates the resolved configuration without invoking the bundler.

use elmpack_config::{validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::Context;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Schema checks on the resolved record
/// 2. Entry module exists under the project root (unless `--schema-only`)
pub fn execute(ctx: &Context, args: &CheckArgs) -> Result<()> {
    let config = ctx.resolve();
    ui::info("Checking configuration...");

    if args.schema_only {
        validate_schema(&config)?;
    } else {
        validate_fs(&config, ctx.root())?;
        ui::success(&format!("  {} exists", config.entry));
    }

    if !config.output.path.starts_with(ctx.root()) {
        ui::warning(&format!(
            "Output directory {} is outside the project root",
            config.output.path.display()
        ));
    }

    tracing::info!(
        url = %config.dev_server.url(),
        bundle = %config.output.public_url(),
        "dev server settings"
    );
    ui::success("Configuration is valid!");
    Ok(())
}
