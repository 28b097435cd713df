use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sift` binary.
#[derive(Debug, Parser)]
#[command(name = "sift", version, about = "docsift - upload, index and search documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.output`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend origin, overriding `backend.base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Resolve global flags, taking the output format from config when
    /// `--format` is absent.
    #[must_use]
    pub fn global_flags(&self, configured_output: &str) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(configured_output)),
            base_url: self.base_url.clone(),
        }
    }
}
