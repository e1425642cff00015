//! Plain-text rendering of records, rejected rows and page totals.
//!
//! Every function returns the finished text so it can be checked without a
//! terminal. Colors are only applied when the caller asks for them.

use civlog_engine::PageSummary;
use civlog_providers::{LoadedExport, RejectedRow};
use civlog_types::{FlightRecord, PageTotals};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Dates are shown the way SACI writes them
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn header(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn total(&self, text: &str) -> String {
        if self.enabled {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render_records(records: &[FlightRecord], palette: Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        palette.header(&format!(
            "{:>3}  {:<10}  {:<8}  {:<4}  {:<4}  {:>5}  {:>5}  {:>5}  {:>5}  {:>5}  {:>3}  {}",
            "#", "Date", "Aircraft", "From", "To", "Day", "Night", "Total", "Nav", "IFR", "Ldg",
            "Function"
        ))
    );

    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<10}  {:<8}  {:<4}  {:<4}  {:>5}  {:>5}  {:>5}  {:>5}  {:>5}  {:>3}  {}",
            index + 1,
            record.date.format(DATE_FORMAT).to_string(),
            record.aircraft,
            record.departure,
            record.arrival,
            record.day.to_string(),
            record.night.to_string(),
            record.total().to_string(),
            record.navigation.to_string(),
            record.instrument.to_string(),
            record.landings,
            record.function
        );
    }

    out
}

pub fn render_rejected(rejected: &[RejectedRow], palette: Palette) -> String {
    let mut out = String::new();
    if rejected.is_empty() {
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        palette.warn(&format!("Rejected rows ({}):", rejected.len()))
    );
    for entry in rejected {
        let _ = writeln!(out, "  row {}: {}", entry.row, entry.error);
    }
    out
}

pub fn render_export(export: &LoadedExport, palette: Palette) -> String {
    let mut out = render_records(&export.records, palette);
    let _ = writeln!(
        out,
        "\n{} records ({}), {} rejected",
        export.records.len(),
        export.format,
        export.rejected.len()
    );
    out.push_str(&render_rejected(&export.rejected, palette));
    out
}

const TOTALS_HEADER: [&str; 10] = [
    "Day", "Night", "Total", "Nav", "IFR", "Capt", "Cmd", "Dual", "Co-pil", "Ldg",
];

fn totals_cells(totals: &PageTotals) -> [String; 10] {
    [
        totals.day.to_string(),
        totals.night.to_string(),
        totals.total.to_string(),
        totals.navigation.to_string(),
        totals.instrument.to_string(),
        totals.captain.to_string(),
        totals.command.to_string(),
        totals.dual.to_string(),
        totals.copilot.to_string(),
        totals.landings.to_string(),
    ]
}

fn totals_line(label: &str, count: &str, totals: &PageTotals) -> String {
    let mut line = format!("{:<8}  {:>7}", label, count);
    for cell in totals_cells(totals) {
        let _ = write!(line, "  {:>6}", cell);
    }
    line
}

/// Per-page totals, the running total and how many records are left
pub fn render_pages(
    pages: &[PageSummary],
    running: &PageTotals,
    unassigned: usize,
    palette: Palette,
) -> String {
    let mut out = String::new();

    let mut header = format!("{:<8}  {:>7}", "Page", "Records");
    for title in TOTALS_HEADER {
        let _ = write!(header, "  {:>6}", title);
    }
    let _ = writeln!(out, "{}", palette.header(&header));

    for page in pages {
        let _ = writeln!(
            out,
            "{}",
            totals_line(&page.number.to_string(), &page.records.to_string(), &page.totals)
        );
    }

    let count: usize = pages.iter().map(|p| p.records).sum();
    let _ = writeln!(
        out,
        "{}",
        palette.total(&totals_line("Running", &count.to_string(), running))
    );
    let _ = writeln!(out, "\nUnassigned records: {}", unassigned);
    out
}
