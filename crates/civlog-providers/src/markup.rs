use quick_xml::Reader;
use quick_xml::events::{BytesText, Event};
use std::path::Path;

use crate::Result;
use crate::traits::{ExportParser, ProbeResult, has_extension};

/// SACI legacy spreadsheet export (`.xlt`): an HTML-like table document.
///
/// Every `tr` element is a row, every child element of a row is a cell whose
/// text content becomes the cell value. The first row is the header. Rows are
/// not guaranteed to be in date order, so records are sorted after
/// normalization.
pub struct MarkupParser;

impl ExportParser for MarkupParser {
    fn id(&self) -> &'static str {
        "xlt"
    }

    fn probe(&self, path: &Path) -> ProbeResult {
        if has_extension(path, "xlt") {
            ProbeResult::match_high()
        } else {
            ProbeResult::NoMatch
        }
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let mut rows = read_table_rows(text)?;
        if !rows.is_empty() {
            rows.remove(0);
        }
        Ok(rows)
    }

    fn sorts_by_date(&self) -> bool {
        true
    }
}

fn is_row_tag(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"tr")
}

/// Text of a text node with entities resolved. HTML's `&nbsp;` is the only
/// non-XML entity the exports are known to use; anything unresolvable is kept
/// verbatim rather than failing the whole document.
fn text_content(text: &BytesText) -> String {
    text.unescape_with(|entity| match entity {
        "nbsp" => Some("\u{a0}"),
        _ => None,
    })
    .map(|cow| cow.into_owned())
    .unwrap_or_else(|_| String::from_utf8_lossy(text).into_owned())
}

/// Walk the document and collect every `tr` row in document order
fn read_table_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = Reader::from_str(text);
    reader.check_end_names(false);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut depth = 0usize;
    // (element depth, cells so far)
    let mut row: Option<(usize, Vec<String>)> = None;
    // (element depth, text so far)
    let mut cell: Option<(usize, String)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if row.is_none() {
                    if is_row_tag(e.local_name().as_ref()) {
                        row = Some((depth, Vec::new()));
                    }
                } else if cell.is_none() && row.as_ref().is_some_and(|(d, _)| depth == d + 1) {
                    cell = Some((depth, String::new()));
                }
            }
            Event::Empty(e) => match &mut row {
                None if is_row_tag(e.local_name().as_ref()) => rows.push(Vec::new()),
                Some((row_depth, cells)) if cell.is_none() && depth == *row_depth => {
                    cells.push(String::new());
                }
                _ => {}
            },
            Event::Text(t) => {
                if let Some((_, content)) = &mut cell {
                    content.push_str(&text_content(&t));
                }
            }
            Event::CData(c) => {
                if let Some((_, content)) = &mut cell {
                    content.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                if cell.as_ref().is_some_and(|(d, _)| *d == depth) {
                    if let (Some((_, content)), Some((_, cells))) = (cell.take(), row.as_mut()) {
                        cells.push(content);
                    }
                } else if row.as_ref().is_some_and(|(d, _)| *d == depth)
                    && let Some((_, cells)) = row.take()
                {
                    rows.push(cells);
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rows)
}
