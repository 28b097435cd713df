use anyhow::Context;
use sift_core::routes::{Page, ROUTES};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RoutesArgs;
use crate::output::output;

/// Handle `sift routes`.
pub fn handle(args: &RoutesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(path) = &args.path else {
        return output(&ROUTES, flags.format);
    };
    let page = Page::resolve(path).with_context(|| format!("no page for path '{path}'"))?;
    let route = ROUTES
        .iter()
        .find(|route| route.page == page)
        .context("page table is missing a resolved page")?;
    output(route, flags.format)
}
