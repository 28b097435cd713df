use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sift error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config =
        sift_config::SiftConfig::load_with_dotenv().context("failed to load docsift config")?;
    let flags = cli.global_flags(&config.general.output);
    if let Some(base_url) = &flags.base_url {
        config.backend.base_url.clone_from(base_url);
    }

    match &cli.command {
        cli::Commands::Routes(args) => return commands::routes::handle(args, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let ctx = context::AppContext::init(config, cancel)?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SIFT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Cancel `cancel` on the first Ctrl-C.
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted; cancelling in-flight request");
            cancel.cancel();
        }
    });
}
