use clap::ValueEnum;

/// Serialization used by `elmpack print`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum PrintFormat {
    /// Bundler-shaped JSON document
    #[value(name = "json")]
    Json,

    /// TOML rendering of the same record
    #[value(name = "toml")]
    Toml,
}
