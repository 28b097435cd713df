use anyhow::Context;
use sift_client::UploadFile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UploadArgs;
use crate::context::AppContext;
use crate::output::output;

/// Read `path` for upload, warning when the backend will likely reject it.
pub async fn read_upload(path: &std::path::Path) -> anyhow::Result<UploadFile> {
    let file = UploadFile::open(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    if !file.is_supported_type() {
        tracing::warn!(
            file = file.file_name(),
            supported = ?sift_client::SUPPORTED_EXTENSIONS,
            "file type is probably not supported by the backend"
        );
    }
    Ok(file)
}

/// Handle `sift upload`.
pub async fn handle(
    args: &UploadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file = read_upload(&args.file).await?;
    let resp = ctx.store().upload_file(file, &ctx.cancel).await?;
    output(&resp, flags.format)
}
