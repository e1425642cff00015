use chrono::NaiveDate;
use civlog_types::{ColumnMap, FieldError, fold_for_match};

/// Status marker SACI puts on rows that were excluded at the source,
/// already folded (lowercase, no diacritics)
const EXCLUSION_MARKER: &str = "exclusao";

/// Parse a `D/M/YYYY` date cell (day and month may be one or two digits)
pub fn parse_flight_date(cell: &str) -> Result<NaiveDate, FieldError> {
    let cell = cell.trim();
    NaiveDate::parse_from_str(cell, "%d/%m/%Y").map_err(|_| FieldError::MalformedDate {
        value: cell.to_string(),
    })
}

/// Whether a status cell marks the row as excluded at the source
pub fn is_excluded_status(status: &str) -> bool {
    fold_for_match(status).contains(EXCLUSION_MARKER)
}

/// Row-level filter shared by every export format.
///
/// Keeps a positional row only if its date cell is a valid `D/M/YYYY` date and
/// its status cell does not mark it as excluded. Missing cells count as blank.
pub fn keep_row(row: &[String], columns: &ColumnMap) -> bool {
    let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");

    parse_flight_date(cell(columns.date)).is_ok() && !is_excluded_status(cell(columns.status))
}

/// Apply [`keep_row`] to a table, preserving order
pub fn filter_rows(rows: Vec<Vec<String>>, columns: &ColumnMap) -> Vec<Vec<String>> {
    let before = rows.len();
    let kept: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|row| keep_row(row, columns))
        .collect();
    log::debug!(
        "row filter kept {} of {} rows ({} dropped)",
        kept.len(),
        before,
        before - kept.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, status: &str) -> Vec<String> {
        let columns = ColumnMap::default();
        let mut row = vec![String::new(); columns.width()];
        row[columns.date] = date.to_string();
        row[columns.status] = status.to_string();
        row
    }

    #[test]
    fn test_date_accepts_unpadded_parts() {
        assert_eq!(
            parse_flight_date("3/7/2023").unwrap(),
            NaiveDate::from_ymd_opt(2023, 7, 3).unwrap()
        );
        assert_eq!(
            parse_flight_date(" 03/07/2023 ").unwrap(),
            NaiveDate::from_ymd_opt(2023, 7, 3).unwrap()
        );
    }

    #[test]
    fn test_date_rejects_garbage() {
        for cell in ["", "Data", "31/02/2023", "2023-07-03", "3/7"] {
            assert!(parse_flight_date(cell).is_err(), "cell {:?}", cell);
        }
    }

    #[test]
    fn test_exclusion_status_any_case_or_accent() {
        assert!(is_excluded_status("Exclusão"));
        assert!(is_excluded_status("PEDIDO DE EXCLUSÃO"));
        assert!(is_excluded_status("exclusao aprovada"));
        assert!(!is_excluded_status("Aprovado"));
        assert!(!is_excluded_status(""));
    }

    #[test]
    fn test_filter_keeps_order() {
        let columns = ColumnMap::default();
        let rows = vec![
            row("1/1/2024", "Aprovado"),
            row("Data", "Status"),
            row("2/1/2024", "Exclusão"),
            row("3/1/2024", ""),
            vec!["".to_string()],
        ];
        let kept = filter_rows(rows, &columns);
        let dates: Vec<&str> = kept.iter().map(|r| r[columns.date].as_str()).collect();
        assert_eq!(dates, vec!["1/1/2024", "3/1/2024"]);
    }
}
