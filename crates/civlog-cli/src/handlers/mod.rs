pub mod close;
pub mod export;
pub mod show;
pub mod totals;

use anyhow::Result;
use civlog_engine::PartitionSnapshot;
use is_terminal::IsTerminal;
use serde_json::json;

use crate::args::OutputFormat;
use crate::views::{Palette, render_pages};

/// Colors only when a person is reading stdout
pub(crate) fn stdout_palette() -> Palette {
    Palette::new(std::io::stdout().is_terminal())
}

/// Closed pages, running total and unassigned count, as `totals` and `close`
/// print them
pub(crate) fn page_report(
    snapshot: &PartitionSnapshot,
    format: OutputFormat,
    palette: Palette,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "pages": snapshot.pages,
                "running": snapshot.running,
                "unassigned": snapshot.unassigned,
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
        OutputFormat::Plain => Ok(render_pages(
            &snapshot.pages,
            &snapshot.running,
            snapshot.unassigned,
            palette,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civlog_engine::PagePartitioner;
    use civlog_providers::load_export;
    use civlog_testing::ExportBuilder;

    fn snapshot() -> PartitionSnapshot {
        let export = ExportBuilder::twelve_row_scenario();
        let loaded = load_export("voos.csv", &export.csv_bytes()).unwrap();
        let mut partitioner = PagePartitioner::new(loaded.records, 10);
        partitioner.toggle_select(4);
        partitioner.commit_page();
        partitioner.dismiss_review();
        partitioner.snapshot()
    }

    #[test]
    fn test_page_report_json() {
        let report = page_report(&snapshot(), OutputFormat::Json, Palette::new(false)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["pages"][0]["records"], 5);
        assert_eq!(json["running"]["total"], 8.8);
        assert_eq!(json["unassigned"], 4);
    }

    #[test]
    fn test_page_report_plain() {
        let report = page_report(&snapshot(), OutputFormat::Plain, Palette::new(false)).unwrap();
        assert!(report.contains("Running"));
        assert!(report.ends_with("Unassigned records: 4\n"));
    }
}
