use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the page table, or resolve one path to its page.
    Routes(RoutesArgs),
    /// Upload a file and print its split results.
    Upload(UploadArgs),
    /// Upload, select every chunk, submit, index, then run each query.
    Run(RunArgs),
    /// Search one or more existing indices.
    Search(SearchArgs),
    /// List indices stored on the backend.
    Indices,
    /// Remote model configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Check that the backend is reachable.
    Health,
    /// Print the JSON schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RoutesArgs {
    /// Path to resolve, e.g. `/vector-search?q=1`.
    pub path: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    pub file: PathBuf,

    /// Query to run once the index exists. Repeatable.
    #[arg(long = "query", short = 'Q')]
    pub queries: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Index to search. Repeat to search several indices at once.
    #[arg(long = "index", short = 'i', required = true)]
    pub indices: Vec<String>,

    pub query: String,

    /// Results to return.
    #[arg(long, default_value_t = sift_core::SEARCH_TOP_K)]
    pub top_k: usize,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the backend's model configuration.
    Get,
    /// Merge a JSON object into the backend's model configuration.
    Update {
        /// e.g. `{"llm_type": "openai"}`
        json: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Session,
    SubmitSummary,
    SearchHit,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
