use std::path::Path;

use crate::delimited::DelimitedParser;
use crate::markup::MarkupParser;
use crate::traits::ExportParser;

/// Create every known parser
pub fn create_all_parsers() -> Vec<Box<dyn ExportParser>> {
    vec![Box::new(DelimitedParser), Box::new(MarkupParser)]
}

/// Pick the parser with the highest probe confidence for `path`.
///
/// The delimited parser accepts any file at low confidence, so this always
/// returns a parser: only `.xlt` files go to the markup parser.
pub fn detect_parser_from_path(path: &Path) -> Box<dyn ExportParser> {
    create_all_parsers()
        .into_iter()
        .filter(|p| p.probe(path).is_match())
        .max_by(|a, b| {
            a.probe(path)
                .confidence()
                .total_cmp(&b.probe(path).confidence())
        })
        .unwrap_or_else(|| Box::new(DelimitedParser))
}
