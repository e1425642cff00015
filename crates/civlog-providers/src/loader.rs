use civlog_types::{ColumnMap, FlightRecord, RowError};
use std::path::Path;

use crate::Result;
use crate::decode::decode_export;
use crate::normalize::normalize_row;
use crate::registry::detect_parser_from_path;
use crate::row::SourceRow;

/// A row that passed the date/exclusion filter but could not be normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based position among the filtered data rows
    pub row: usize,
    pub error: RowError,
}

/// Result of loading one export file
#[derive(Debug, Clone, Default)]
pub struct LoadedExport {
    /// Parser that handled the file ("csv" or "xlt")
    pub format: &'static str,
    pub records: Vec<FlightRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// Read and normalize an export file from disk using the default SACI layout
pub fn load_export_file(path: &Path) -> Result<LoadedExport> {
    load_export_file_with(path, &ColumnMap::default())
}

/// Read and normalize an export file from disk with a custom column layout
pub fn load_export_file_with(path: &Path, columns: &ColumnMap) -> Result<LoadedExport> {
    let bytes = std::fs::read(path)?;
    load_export_with(path, &bytes, columns)
}

/// Normalize export bytes using the default SACI layout.
///
/// `name` is only used to pick the format by its extension.
pub fn load_export(name: impl AsRef<Path>, bytes: &[u8]) -> Result<LoadedExport> {
    load_export_with(name, bytes, &ColumnMap::default())
}

/// Decode, parse, filter and normalize a whole export.
///
/// Markup exports are sorted by date afterwards (stable, so same-day rows
/// keep their source order); delimited exports keep file order.
pub fn load_export_with(
    name: impl AsRef<Path>,
    bytes: &[u8],
    columns: &ColumnMap,
) -> Result<LoadedExport> {
    let name = name.as_ref();
    let parser = detect_parser_from_path(name);
    let text = decode_export(bytes);
    let rows = parser.parse_rows(&text, columns)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for (index, cells) in rows.iter().enumerate() {
        match SourceRow::from_cells(cells, columns).and_then(|row| normalize_row(&row)) {
            Ok(record) => records.push(record),
            Err(error) => {
                log::warn!("{}: row {} rejected: {}", name.display(), index + 1, error);
                rejected.push(RejectedRow {
                    row: index + 1,
                    error,
                });
            }
        }
    }

    if parser.sorts_by_date() {
        records.sort_by_key(|r| r.date);
    }

    log::info!(
        "{}: loaded {} records ({} rejected) as {}",
        name.display(),
        records.len(),
        rejected.len(),
        parser.id()
    );

    Ok(LoadedExport {
        format: parser.id(),
        records,
        rejected,
    })
}
