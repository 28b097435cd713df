use anyhow::Context;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift config`.
pub async fn handle(
    action: &ConfigCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let resp = match action {
        ConfigCommands::Get => ctx.until_cancelled(ctx.backend.remote_config()).await?,
        ConfigCommands::Update { json } => {
            let updates: Value =
                serde_json::from_str(json).context("config update must be valid JSON")?;
            ctx.until_cancelled(ctx.backend.update_remote_config(&updates))
                .await?
        }
    };
    output(&resp, flags.format)
}
