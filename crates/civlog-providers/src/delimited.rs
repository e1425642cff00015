use csv::ReaderBuilder;
use std::path::Path;

use crate::Result;
use crate::traits::{ExportParser, ProbeResult, has_extension};

/// Delimiters tried when sniffing, in order of preference
const DELIMITER_CANDIDATES: [u8; 4] = [b';', b',', b'\t', b'|'];

/// Lines inspected when sniffing the delimiter
const SNIFF_LINES: usize = 10;

/// SACI delimited-text export (`.csv`)
///
/// Lines starting with `*` or `=` are comments. The first remaining row is the
/// header and is discarded.
pub struct DelimitedParser;

impl ExportParser for DelimitedParser {
    fn id(&self) -> &'static str {
        "csv"
    }

    fn probe(&self, path: &Path) -> ProbeResult {
        if has_extension(path, "csv") || has_extension(path, "txt") {
            ProbeResult::match_high()
        } else {
            // Anything that is not a markup export is read as delimited text
            ProbeResult::match_low()
        }
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let body = strip_comment_lines(text);
        let delimiter = sniff_delimiter(&body);
        log::debug!("delimited export uses {:?} as delimiter", delimiter as char);

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with(['*', '='])
}

/// Comments are dropped line by line before CSV parsing, so a continuation
/// line of a multi-line quoted field that starts with `*` or `=` is lost too.
/// SACI never writes multi-line fields.
fn strip_comment_lines(text: &str) -> String {
    let mut body = String::with_capacity(text.len());
    for line in text.lines().filter(|line| !is_comment_line(line)) {
        body.push_str(line);
        body.push('\n');
    }
    body
}

/// Field count of each of the first few records when split on `delimiter`
fn field_counts(sample: &str, delimiter: u8) -> Vec<usize> {
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(sample.as_bytes())
        .records()
        .take(SNIFF_LINES)
        .map_while(|record| record.ok().map(|r| r.len()))
        .collect()
}

/// Pick the delimiter that splits the leading lines into a consistent,
/// multi-column layout. Falls back to the widest split, then to `;`.
fn sniff_delimiter(body: &str) -> u8 {
    let sample: String = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let counts: Vec<(u8, Vec<usize>)> = DELIMITER_CANDIDATES
        .iter()
        .map(|&d| (d, field_counts(&sample, d)))
        .collect();

    let consistent = counts.iter().find(|(_, c)| {
        c.first().is_some_and(|&first| first > 1) && c.iter().all(|&n| n == c[0])
    });
    if let Some((delimiter, _)) = consistent {
        return *delimiter;
    }

    counts
        .iter()
        .filter_map(|(d, c)| c.first().filter(|&&n| n > 1).map(|&n| (*d, n)))
        // max_by_key keeps the last maximum; reverse so earlier candidates win ties
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(d, _)| d)
        .unwrap_or(b';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_comments_removed() {
        let text = "* SACI export\n=====\nData;ACFT\n1/1/2024;PR-AAA\n* mid comment\n2/1/2024;PR-BBB\n";
        let rows = DelimitedParser.tokenize(text).unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["1/1/2024".to_string(), "PR-AAA".to_string()],
                vec!["2/1/2024".to_string(), "PR-BBB".to_string()],
            ]
        );
    }

    #[test]
    fn test_sniffs_comma_and_tab() {
        let comma = "Data,ACFT,DEP\n1/1/2024,PR-AAA,SBMT\n";
        assert_eq!(DelimitedParser.tokenize(comma).unwrap()[0].len(), 3);

        let tab = "Data\tACFT\n1/1/2024\tPR-AAA\n";
        assert_eq!(DelimitedParser.tokenize(tab).unwrap()[0][1], "PR-AAA");

        let pipe = "Data|ACFT\n1/1/2024|PR-AAA\n";
        assert_eq!(DelimitedParser.tokenize(pipe).unwrap()[0][1], "PR-AAA");
    }

    #[test]
    fn test_comment_prefix_inside_multiline_field_is_dropped() {
        let text = "Data;OBS\n1/1/2024;\"linha um\nlinha dois\"\n2/1/2024;\"a\n* b\nc\"\n";
        let rows = DelimitedParser.tokenize(text).unwrap();
        assert_eq!(rows[0][1], "linha um\nlinha dois");
        assert_eq!(rows[1][1], "a\nc");
    }

    #[test]
    fn test_semicolon_wins_over_decimal_commas() {
        // distance uses a decimal comma, which must not split the field
        let text = "Data;NM\n1/1/2024;\"12,5\"\n2/1/2024;3,0\n";
        let rows = DelimitedParser.tokenize(text).unwrap();
        assert_eq!(rows[0], vec!["1/1/2024", "12,5"]);
        assert_eq!(rows[1], vec!["2/1/2024", "3,0"]);
    }

    #[test]
    fn test_crlf_and_quoted_fields() {
        let text = "Data;OBS\r\n1/1/2024;\"Toque; arremetida\"\r\n";
        let rows = DelimitedParser.tokenize(text).unwrap();
        assert_eq!(rows[0][1], "Toque; arremetida");
    }

    #[test]
    fn test_only_header_yields_no_rows() {
        assert!(DelimitedParser.tokenize("Data;ACFT\n").unwrap().is_empty());
        assert!(DelimitedParser.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_probe() {
        assert!(DelimitedParser.probe(Path::new("voos.CSV")).confidence() > 0.9);
        assert!(DelimitedParser.probe(Path::new("voos.dat")).is_match());
    }
}
