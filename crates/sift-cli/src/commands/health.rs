use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HealthResponse {
    origin: String,
    message: String,
}

/// Handle `sift health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let banner = ctx.until_cancelled(ctx.backend.banner()).await?;
    output(
        &HealthResponse {
            origin: ctx.config.backend.origin().to_string(),
            message: banner.message,
        },
        flags.format,
    )
}
