use anyhow::Result;
use serde_json::json;
use std::path::Path;

use super::stdout_palette;
use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::views::render_export;

pub fn handle(ctx: &ExecutionContext, file: &Path) -> Result<()> {
    let export = ctx.load(file)?;

    match ctx.format {
        OutputFormat::Json => {
            let rejected: Vec<_> = export
                .rejected
                .iter()
                .map(|r| json!({ "row": r.row, "error": r.error.to_string() }))
                .collect();
            let output = json!({
                "format": export.format,
                "records": export.records,
                "rejected": rejected,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            print!("{}", render_export(&export, stdout_palette()));
        }
    }

    Ok(())
}
