use anyhow::Result;
use civlog_engine::PagePartitioner;
use is_terminal::IsTerminal;
use std::path::Path;

use super::{page_report, stdout_palette};
use crate::context::ExecutionContext;
use crate::tui::{self, CloseApp};
use crate::views::render_rejected;

pub fn handle(ctx: &ExecutionContext, file: &Path) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "`civlog close` needs an interactive terminal; use `civlog totals --pages` instead"
        );
    }

    let export = ctx.load(file)?;
    if export.records.is_empty() {
        anyhow::bail!("No flight records in {}", file.display());
    }
    if !export.rejected.is_empty() {
        eprint!("{}", render_rejected(&export.rejected, stdout_palette()));
    }

    let title = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    let partitioner = PagePartitioner::new(export.records, ctx.config.page_size);

    let app = tui::run(CloseApp::new(partitioner, title))?;

    let snapshot = app.partitioner.snapshot();
    log::info!(
        "session ended with {} closed pages, {} records unassigned",
        snapshot.pages.len(),
        snapshot.unassigned
    );

    print!("{}", page_report(&snapshot, ctx.format, stdout_palette())?);

    Ok(())
}
