use civlog_types::ColumnMap;
use std::path::Path;

use crate::Result;
use crate::filter::filter_rows;

/// One SACI export format
///
/// Responsibilities:
/// - Recognize files of this format from their name
/// - Tokenize decoded text into ordered rows of cells, header removed
/// - Declare whether the resulting records need sorting by date
pub trait ExportParser: Send + Sync {
    /// Unique format ID (e.g., "csv", "xlt")
    fn id(&self) -> &'static str;

    /// Check if a file is in this format
    fn probe(&self, path: &Path) -> ProbeResult;

    /// Split decoded text into rows of cells, header row discarded.
    /// Row and column order must match the source exactly.
    fn tokenize(&self, text: &str) -> Result<Vec<Vec<String>>>;

    /// Whether records from this format arrive out of date order
    fn sorts_by_date(&self) -> bool {
        false
    }

    /// Tokenize and drop rows with an invalid date or an exclusion status
    fn parse_rows(&self, text: &str, columns: &ColumnMap) -> Result<Vec<Vec<String>>> {
        Ok(filter_rows(self.tokenize(text)?, columns))
    }
}

// --- Helper types ---

/// Probe result with confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeResult {
    /// Parser can handle this file with given confidence (0.0 - 1.0)
    Confidence(f32),
    /// Parser cannot handle this file
    NoMatch,
}

impl ProbeResult {
    /// Create high confidence match (1.0)
    pub fn match_high() -> Self {
        ProbeResult::Confidence(1.0)
    }

    /// Create low confidence match (0.3), used for fallbacks
    pub fn match_low() -> Self {
        ProbeResult::Confidence(0.3)
    }

    /// Check if this is a match (confidence > 0)
    pub fn is_match(&self) -> bool {
        matches!(self, ProbeResult::Confidence(c) if *c > 0.0)
    }

    /// Get confidence score (0.0 if NoMatch)
    pub fn confidence(&self) -> f32 {
        match self {
            ProbeResult::Confidence(c) => *c,
            ProbeResult::NoMatch => 0.0,
        }
    }
}

/// Case-insensitive file extension check
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
