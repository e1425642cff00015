use regex::Regex;
use std::sync::LazyLock;

/// First run of digits in a crew cell
/// Example: "Fulano de Tal (123456)" -> "123456"
static CREW_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extract the numeric crew identifier (CANAC) embedded in a crew name cell.
///
/// Returns an empty string when the cell has no digits; callers treat that as
/// "unknown", never as an error.
pub fn extract_crew_id(crew: &str) -> String {
    CREW_ID_REGEX
        .find(crew)
        .map(|m| m.as_str().replace(['(', ')'], "").trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_id() {
        assert_eq!(extract_crew_id("Smith (12345)"), "12345");
    }

    #[test]
    fn test_no_digits_is_empty() {
        assert_eq!(extract_crew_id("Smith"), "");
        assert_eq!(extract_crew_id(""), "");
    }

    #[test]
    fn test_bare_id_and_first_run_wins() {
        assert_eq!(extract_crew_id("123456 - Fulano"), "123456");
        assert_eq!(extract_crew_id("Fulano (111) / Beltrano (222)"), "111");
    }
}
