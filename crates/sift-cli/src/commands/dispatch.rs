use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed networked command to its handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Upload(args) => commands::upload::handle(&args, ctx, flags).await,
        Commands::Run(args) => commands::run::handle(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Indices => commands::indices::handle(ctx, flags).await,
        Commands::Config { action } => commands::config::handle(&action, ctx, flags).await,
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Routes(_) | Commands::Schema(_) => {
            unreachable!("routes/schema are pre-dispatched in main")
        }
    }
}
