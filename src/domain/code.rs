//! Product code normalization and validation.
//!
//! Canonical form is six dash-joined groups of five uppercase alphanumerics,
//! 35 characters in total. User input is canonicalized before validation but
//! never coerced beyond the two recovery rules below: anything still malformed
//! after normalization fails [`is_valid`].

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{5}(-[A-Z0-9]{5}){5}$").expect("code pattern compiles"));

const GROUP_COUNT: usize = 6;
const GROUP_LEN: usize = 5;

/// True iff `code` matches the canonical grammar exactly.
pub fn is_valid(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Trim, uppercase and strip spaces. Used for search terms, which are matched
/// as substrings and must not be re-chunked.
pub fn normalize_loose(input: &str) -> String {
    input.trim().to_uppercase().replace(' ', "")
}

/// Canonicalize user input into the dashed form where possible.
///
/// After the loose pass, input that already splits into six non-empty
/// five-character segments is re-joined with dashes. A continuous entry
/// without dashes is re-chunked when exactly 30 alphanumerics remain.
/// Anything else is returned unchanged so it fails validation downstream.
pub fn normalize_strict(input: &str) -> String {
    let compact = normalize_loose(input);

    let segments: Vec<&str> = compact.split('-').filter(|s| !s.is_empty()).collect();
    if segments.len() == GROUP_COUNT && segments.iter().all(|s| s.chars().count() == GROUP_LEN) {
        return segments.join("-");
    }

    let alphanumeric: Vec<char> = compact.chars().filter(|c| c.is_alphanumeric()).collect();
    if alphanumeric.len() == GROUP_COUNT * GROUP_LEN {
        return alphanumeric
            .chunks(GROUP_LEN)
            .map(|group| group.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("-");
    }

    compact
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CANONICAL: &str = "ABCDE-ABCDE-ABCDE-ABCDE-ABCDE-ABCDE";

    #[rstest]
    #[case("abcde abcde abcde abcde abcde abcde", CANONICAL)]
    #[case("abcde-abcde-abcde-abcde-abcde-abcde", CANONICAL)]
    #[case("  ABCDE-ABCDE-ABCDE-ABCDE-ABCDE-ABCDE  ", CANONICAL)]
    #[case("abcdeabcdeabcdeabcdeabcdeabcde", CANONICAL)]
    #[case("abcdefghij klmno pqrst uvwxy z1234", "ABCDE-FGHIJ-KLMNO-PQRST-UVWXY-Z1234")]
    #[case("ABCDE--ABCDE-ABCDE-ABCDE-ABCDE-ABCDE", CANONICAL)]
    fn strict_normalization_canonicalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_strict(input), expected);
    }

    #[rstest]
    #[case("INVALID-CODE", "INVALID-CODE")]
    #[case("abcde", "ABCDE")]
    #[case("", "")]
    // 29 alphanumerics: neither rule applies, passed through for rejection.
    #[case("abcdeabcdeabcdeabcdeabcdeabcd", "ABCDEABCDEABCDEABCDEABCDEABCD")]
    fn strict_normalization_passes_malformed_input_through(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let normalized = normalize_strict(input);
        assert_eq!(normalized, expected);
        assert!(!is_valid(&normalized));
    }

    #[test]
    fn strict_normalization_is_idempotent_on_canonical_codes() {
        assert_eq!(normalize_strict(CANONICAL), CANONICAL);
        assert_eq!(normalize_strict(&normalize_strict("abcde ".repeat(6).as_str())), CANONICAL);
    }

    #[test]
    fn loose_normalization_does_not_rechunk() {
        assert_eq!(normalize_loose("  ab cde "), "ABCDE");
        assert_eq!(normalize_loose("abcdeabcdeabcdeabcdeabcdeabcde"), "ABCDEABCDEABCDEABCDEABCDEABCDE");
    }

    #[rstest]
    #[case(CANONICAL, true)]
    #[case("ABCDE-FGHIJ-KLMNO-PQRST-UVWXY-Z1234", true)]
    #[case("abcde-abcde-abcde-abcde-abcde-abcde", false)]
    #[case("ABCDE-ABCDE-ABCDE-ABCDE-ABCDE-ABCD", false)]
    #[case("ABCDE-ABCDE-ABCDE-ABCDE-ABCDE-ABCDE-", false)]
    #[case("ABCDE ABCDE-ABCDE-ABCDE-ABCDE-ABCDE", false)]
    #[case("", false)]
    fn validates_against_the_grammar(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_valid(code), expected);
    }
}
