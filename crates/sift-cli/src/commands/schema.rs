use schemars::schema_for;
use sift_core::responses::SubmitSummary;
use sift_core::search::SearchHit;
use sift_core::session::Session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `sift schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Session => schema_for!(Session),
        SchemaType::SubmitSummary => schema_for!(SubmitSummary),
        SchemaType::SearchHit => schema_for!(SearchHit),
    };
    output(&schema, flags.format)
}
