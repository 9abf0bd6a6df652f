//! Schema command: print the resume document's JSON Schema.

use clap::Args;
use tracing::{debug, instrument};

use cvlens_core::ResumeData;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema editors and validators can use for resume documents.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    println!("{}", serde_json::to_string_pretty(&ResumeData::json_schema())?);
    Ok(())
}
