//! Template command: print the placeholder resume.

use clap::Args;
use tracing::{debug, instrument};

use cvlens_core::ResumeData;

/// Arguments for the `template` subcommand.
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// Single-line JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Print the built-in placeholder resume as JSON.
///
/// Always JSON: the output is meant to be edited and fed back to `analyze`.
#[instrument(name = "cmd_template", skip_all)]
pub fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    debug!(compact = args.compact, "executing template command");
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &TemplateArgs) -> anyhow::Result<String> {
    let template = ResumeData::template();
    let json = if args.compact {
        serde_json::to_string(&template)?
    } else {
        serde_json::to_string_pretty(&template)?
    };
    Ok(json)
}
