use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Single-line JSON.
    Raw,
}

impl OutputFormat {
    /// Parse the `general.output` config value. Unknown values fall back to
    /// JSON with a warning.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value, true).unwrap_or_else(|_| {
            tracing::warn!(value, "unknown general.output; using json");
            Self::Json
        })
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub base_url: Option<String>,
}
