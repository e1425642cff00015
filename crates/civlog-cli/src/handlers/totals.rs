use anyhow::Result;
use civlog_engine::{Outcome, PagePartitioner};
use std::path::Path;

use super::{page_report, stdout_palette};
use crate::context::ExecutionContext;

/// Scripted page closing: optionally rebuild page 1 up to a row, then close
/// one page per entry of `sizes` from the front of the remaining records.
pub fn handle(
    ctx: &ExecutionContext,
    file: &Path,
    sizes: &[usize],
    start_here: Option<usize>,
) -> Result<()> {
    let export = ctx.load(file)?;
    let mut partitioner = PagePartitioner::new(export.records, ctx.config.page_size);

    if let Some(row) = start_here {
        let Some(record) = row.checked_sub(1).and_then(|i| partitioner.unassigned().get(i))
        else {
            anyhow::bail!(
                "--start-here {} is out of range (1..={})",
                row,
                partitioner.unassigned().len()
            );
        };
        let id = record.id;
        partitioner.start_here(id);
    }

    close_pages(&mut partitioner, sizes)?;

    print!(
        "{}",
        page_report(&partitioner.snapshot(), ctx.format, stdout_palette())?
    );
    Ok(())
}

fn close_pages(partitioner: &mut PagePartitioner, sizes: &[usize]) -> Result<()> {
    for (index, &size) in sizes.iter().enumerate() {
        let remaining = partitioner.unassigned().len();
        if size == 0 || size > remaining {
            anyhow::bail!(
                "page {} of --pages asks for {} records but {} remain",
                index + 1,
                size,
                remaining
            );
        }

        partitioner.toggle_select(size - 1);
        if partitioner.commit_page() != Outcome::Changed {
            anyhow::bail!("could not close page {} of --pages", index + 1);
        }
        partitioner.dismiss_review();
    }
    Ok(())
}
