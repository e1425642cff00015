use encoding_rs::WINDOWS_1252;

/// Decode raw export bytes.
///
/// SACI writes single-byte Latin text. The `iso-8859-1` label resolves to
/// windows-1252 under the WHATWG encoding standard, so that is what we decode
/// with; every byte maps to a character and decoding cannot fail. A leading
/// byte-order mark, if any, is dropped.
pub fn decode_export(bytes: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    strip_bom(&text).to_string()
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}')
        // UTF-8 BOM read through a single-byte codec
        .or_else(|| text.strip_prefix("\u{EF}\u{BB}\u{BF}"))
        .unwrap_or(text)
}
