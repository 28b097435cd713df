use sift_client::IndexBackend;
use sift_core::ids::IndexId;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift search`. Several `--index` flags search them together.
pub async fn handle(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.query.is_empty() {
        anyhow::bail!("query must not be empty");
    }
    let indices: Vec<IndexId> = args.indices.iter().map(|id| IndexId::new(id.as_str())).collect();

    let resp = match indices.as_slice() {
        [index_id] => {
            ctx.until_cancelled(ctx.backend.search(index_id, &args.query, args.top_k))
                .await?
        }
        many => {
            ctx.until_cancelled(ctx.backend.search_many(many, &args.query, args.top_k))
                .await?
        }
    };
    tracing::info!(indices = indices.len(), hits = resp.results.len(), "search complete");
    output(&resp, flags.format)
}
