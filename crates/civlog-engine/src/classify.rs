use civlog_types::fold_for_match;
use serde::{Deserialize, Serialize};

/// Duty category a flight's total time is credited to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyBucket {
    Command,
    Dual,
    CoPilot,
}

/// Classify a crew function cell. First match wins:
///
/// 1. contains "solo", or is exactly "piloto em comando" → [`DutyBucket::Command`]
/// 2. contains "instrutor" or "instrução" → [`DutyBucket::Dual`]
/// 3. contains "co-piloto" → [`DutyBucket::CoPilot`]
///
/// Matching ignores case, surrounding whitespace and diacritics. Anything else
/// is unclassified.
pub fn classify(function: &str) -> Option<DutyBucket> {
    let folded = fold_for_match(function);

    if folded.contains("solo") || folded == "piloto em comando" {
        Some(DutyBucket::Command)
    } else if folded.contains("instrutor") || folded.contains("instrucao") {
        Some(DutyBucket::Dual)
    } else if folded.contains("co-piloto") {
        Some(DutyBucket::CoPilot)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command() {
        assert_eq!(classify("Piloto em comando"), Some(DutyBucket::Command));
        assert_eq!(classify("  PILOTO EM COMANDO "), Some(DutyBucket::Command));
        assert_eq!(classify("Solo"), Some(DutyBucket::Command));
        assert_eq!(classify("Voo solo supervisionado"), Some(DutyBucket::Command));
        // equality only, not containment
        assert_eq!(classify("Piloto em comando substituto"), None);
    }

    #[test]
    fn test_dual_ignores_case_and_accents() {
        for function in ["Instrutor de voo", "INSTRUTOR DE VOO", "Instrução", "instrucao"] {
            assert_eq!(classify(function), Some(DutyBucket::Dual), "{}", function);
        }
    }

    #[test]
    fn test_copilot() {
        assert_eq!(classify("Co-piloto"), Some(DutyBucket::CoPilot));
        assert_eq!(classify("CO-PILOTO"), Some(DutyBucket::CoPilot));
    }

    #[test]
    fn test_first_match_wins() {
        // "solo" beats the instructor rule
        assert_eq!(classify("Instrutor solo"), Some(DutyBucket::Command));
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("Aluno"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("copiloto"), None);
    }
}
