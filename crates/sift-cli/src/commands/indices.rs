use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift indices`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = ctx.until_cancelled(ctx.backend.list_indices()).await?;
    tracing::info!(count = list.indices.len(), "listed indices");
    output(&list, flags.format)
}
