//! Print command implementation.

use elmpack_config::ConfigOverrides;

use crate::cli::{PrintArgs, PrintFormat};
use crate::commands::Context;
use crate::error::Result;

/// Write the resolved configuration to stdout.
pub fn execute(ctx: &Context, args: &PrintArgs) -> Result<()> {
    println!("{}", render(ctx, args)?);
    Ok(())
}

/// Render the resolved configuration in the requested format.
pub fn render(ctx: &Context, args: &PrintArgs) -> Result<String> {
    let config = ctx.resolve();
    tracing::debug!(format = ?args.format, overrides = args.overrides, "rendering configuration");

    if args.overrides {
        return render_overrides(&ConfigOverrides::from_config(&config), args);
    }

    let rendered = match args.format {
        PrintFormat::Json => {
            let value = config.to_value()?;
            if args.compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            }
        }
        PrintFormat::Toml => toml::to_string_pretty(&config)?,
    };

    Ok(rendered)
}

fn render_overrides(overrides: &ConfigOverrides, args: &PrintArgs) -> Result<String> {
    let rendered = match args.format {
        PrintFormat::Json if args.compact => serde_json::to_string(overrides)?,
        PrintFormat::Json => serde_json::to_string_pretty(overrides)?,
        PrintFormat::Toml => toml::to_string_pretty(overrides)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elmpack_config::ConfigResolver;

    fn ctx() -> Context {
        Context::new(ConfigResolver::at("/srv/app"))
    }

    #[test]
    fn test_render_json_bundler_shape() {
        let args = PrintArgs {
            format: PrintFormat::Json,
            compact: true,
            overrides: false,
        };
        let rendered = render(&ctx(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["output"]["path"], "/srv/app/dist");
        assert_eq!(value["devServer"]["port"], 3000);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_render_toml() {
        let args = PrintArgs {
            format: PrintFormat::Toml,
            compact: false,
            overrides: false,
        };
        let rendered = render(&ctx(), &args).unwrap();
        assert!(rendered.contains("entry = \"./src/index.js\""));
        assert!(rendered.contains("elm-webpack-loader"));
    }

    #[test]
    fn test_render_toml_overrides_shape() {
        let args = PrintArgs {
            format: PrintFormat::Toml,
            compact: false,
            overrides: true,
        };
        let rendered = render(&ctx(), &args).unwrap();
        let parsed: ConfigOverrides = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed, ConfigOverrides::from_config(&ctx().resolve()));
        assert!(rendered.contains("[dev_server]"));
        assert!(!rendered.contains("elm-webpack-loader"));
    }
}
