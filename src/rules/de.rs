//! Germany: district code, hyphen, recognition letters and number (`B-MW1234`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZÄÖÜ]{1,3}-[A-ZÄÖÜ]{1,2}[0-9]{1,4}[A-ZÄÖÜ]?$")
        .expect("valid German plate pattern")
});

const MAX_SUFFIX_LEN: usize = 6;

pub fn rule() -> CountryRule {
    CountryRule::new("de", "Germany", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    let Some(hyphen) = plate.chars().position(|c| c == '-') else {
        return PlateResult::invalid(ErrorCode::MissingHyphen, "German plate requires a hyphen");
    };

    if !(1..=3).contains(&hyphen) {
        return PlateResult::invalid(
            ErrorCode::InvalidHyphenPosition,
            "Hyphen must be in position 2 (L-XXX), 3 (LL-XXX), or 4 (LLL-XXX)",
        );
    }

    let parts: Vec<&str> = plate.split('-').collect();
    if parts.len() > 2 {
        return PlateResult::invalid(ErrorCode::MultipleHyphens, "Plate must have only 1 hyphen");
    }

    let suffix_len = parts[1].chars().count();
    if FORMAT.is_match(plate) && (1..=MAX_SUFFIX_LEN).contains(&suffix_len) {
        return PlateResult::valid();
    }

    PlateResult::invalid(ErrorCode::InvalidDePlateFormat, "Invalid German plate format")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(plate: &str) -> Option<ErrorCode> {
        rule().validate(plate).error()
    }

    #[test]
    fn accepts_standard_plates() {
        assert!(rule().validate("B-MW1234").is_valid());
        assert!(rule().validate("HH-A1").is_valid());
        assert!(rule().validate("KLE-AB12").is_valid());
    }

    #[test]
    fn accepts_trailing_suffix_letter() {
        assert!(rule().validate("M-A1234E").is_valid());
    }

    #[test]
    fn requires_hyphen() {
        assert_eq!(error_of("BMW1234"), Some(ErrorCode::MissingHyphen));
    }

    #[test]
    fn hyphen_position_is_one_to_three() {
        assert_eq!(error_of("-AB123"), Some(ErrorCode::InvalidHyphenPosition));
        assert_eq!(error_of("ABCD-A12"), Some(ErrorCode::InvalidHyphenPosition));
    }

    #[test]
    fn only_one_hyphen() {
        assert_eq!(error_of("B-A-123"), Some(ErrorCode::MultipleHyphens));
    }

    #[test]
    fn format_and_suffix_length() {
        assert_eq!(error_of("B-123"), Some(ErrorCode::InvalidDePlateFormat));
        assert_eq!(error_of("B-MW12345"), Some(ErrorCode::InvalidDePlateFormat));
        assert_eq!(error_of("B-"), Some(ErrorCode::InvalidDePlateFormat));
    }
}
