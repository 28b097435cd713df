use anyhow::Context;
use serde::Serialize;
use sift_core::responses::{CreateIndexResponse, SearchResponse, SubmitSummary};
use sift_core::session::Session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::commands::upload::read_upload;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct QueryResult {
    query: String,
    response: SearchResponse,
}

#[derive(Debug, Serialize)]
struct RunReport {
    submitted: Option<SubmitSummary>,
    index: Option<CreateIndexResponse>,
    queries: Vec<QueryResult>,
    session: Session,
}

/// Handle `sift run`: the whole upload-to-search workflow on one file.
pub async fn handle(
    args: &RunArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = ctx.store();
    let file = read_upload(&args.file).await?;

    store.upload_file(file, &ctx.cancel).await?;
    let selected = store.select_all_chunks();
    if selected == 0 {
        anyhow::bail!("{} produced no chunks to index", args.file.display());
    }
    tracing::info!(selected, "selected every chunk");

    let submitted = store
        .submit_selected_chunks(&ctx.cancel)
        .await
        .context("chunk submission failed")?;
    let index = store
        .create_index(&ctx.cancel)
        .await
        .context("index creation failed")?;

    let mut queries = Vec::with_capacity(args.queries.len());
    for query in &args.queries {
        if let Some(response) = store.search_vectors(query, &ctx.cancel).await? {
            queries.push(QueryResult {
                query: query.clone(),
                response,
            });
        } else {
            tracing::warn!(query, "skipped empty query");
        }
    }

    output(
        &RunReport {
            submitted,
            index,
            queries,
            session: store.snapshot(),
        },
        flags.format,
    )
}
