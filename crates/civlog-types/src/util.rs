use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold text for loose matching: trim, lowercase and strip diacritics.
///
/// `"  Instrução "` and `"INSTRUCAO"` both fold to `"instrucao"`.
pub fn fold_for_match(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_case_and_accents() {
        assert_eq!(fold_for_match("  Instrução "), "instrucao");
        assert_eq!(fold_for_match("EXCLUSÃO"), "exclusao");
        assert_eq!(fold_for_match("Co-Piloto"), "co-piloto");
        assert_eq!(fold_for_match(""), "");
    }
}
