//! Rule matching and extension resolution queries.

use std::path::Path;

use elmpack_config::BuildConfiguration;

use crate::cli::{CandidatesArgs, MatchArgs};
use crate::commands::Context;
use crate::error::Result;

/// How a single file is handled by the module rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Handled by the named loader
    Loader(String),
    /// A rule's test matched but an exclude pattern skipped it
    Excluded,
    /// No rule applies
    Unhandled,
}

impl std::fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loader(loader) => f.write_str(loader),
            Self::Excluded => f.write_str("(excluded)"),
            Self::Unhandled => f.write_str("(no rule)"),
        }
    }
}

/// Classify `path` against the module rules.
pub fn classify(config: &BuildConfiguration, path: &Path) -> RuleOutcome {
    if let Some(rule) = config.rule_for(path) {
        return RuleOutcome::Loader(rule.loader.clone());
    }

    let excluded = config
        .module_rules()
        .iter()
        .any(|rule| rule.test.is_match(path) && rule.is_excluded(path));
    if excluded {
        RuleOutcome::Excluded
    } else {
        RuleOutcome::Unhandled
    }
}

/// Print `<path>\t<loader>` for every path.
///
/// Relative paths are joined onto the project root first, since the bundler
/// tests rules against absolute module paths.
pub fn matches(ctx: &Context, args: &MatchArgs) -> Result<()> {
    let config = ctx.resolve();

    for path in &args.paths {
        let full = ctx.root().join(path);
        let outcome = classify(&config, &full);
        tracing::debug!(path = %full.display(), %outcome, "matched module rules");
        println!("{}\t{}", path.display(), outcome);
    }

    Ok(())
}

/// Print the candidate paths for a specifier, one per line.
pub fn candidates(ctx: &Context, args: &CandidatesArgs) -> Result<()> {
    let config = ctx.resolve();
    for candidate in config.resolve.candidates(&args.specifier) {
        println!("{candidate}");
    }
    Ok(())
}
