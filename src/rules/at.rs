//! Austria: district code, hyphen, serial (`W-12345`, `GU-ABC1`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

/// 1-2 letters, hyphen, 3-8 alphanumerics.
static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZÄÖÜ]{1,2}-[A-ZÄÖÜ0-9]{3,8}$").expect("valid Austrian plate pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("at", "Austria", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    let Some(hyphen) = plate.chars().position(|c| c == '-') else {
        return PlateResult::invalid(
            ErrorCode::MissingHyphen,
            "Austrian plate requires a hyphen (L-XXXX or LL-XXX)",
        );
    };

    if !matches!(hyphen, 1 | 2) {
        return PlateResult::invalid(
            ErrorCode::InvalidHyphenPosition,
            "Hyphen must be in position 2 (L-XXXX) or 3(LL-XXX)",
        );
    }

    if plate.contains('Q') {
        return PlateResult::invalid(
            ErrorCode::InvalidPlateCharacter,
            "Austrian plates cannot contain the letter 'Q'",
        );
    }

    let parts: Vec<&str> = plate.split('-').collect();
    if parts.len() > 2 {
        return PlateResult::invalid(ErrorCode::MultipleHyphens, "Plate must have only 1 hyphen");
    }

    let serial_len = parts[1].chars().count();
    if !(3..=8).contains(&serial_len) {
        return PlateResult::invalid(
            ErrorCode::InvalidLengthAfterHyphen,
            "The part after hyphen must be 3-8 characters long",
        );
    }

    if FORMAT.is_match(plate) {
        PlateResult::valid()
    } else {
        PlateResult::invalid(
            ErrorCode::InvalidAtPlateFormat,
            "Invalid Austrian plate format (L-XXXX or LL-XXX)",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(plate: &str) -> Option<ErrorCode> {
        rule().validate(plate).error()
    }

    #[test]
    fn accepts_district_and_serial() {
        assert!(rule().validate("W-12345").is_valid());
        assert!(rule().validate("GU-ABC1").is_valid());
        assert!(rule().validate("AB-123456").is_valid());
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        assert!(rule().validate("gu-abc1").is_valid());
    }

    #[test]
    fn requires_hyphen() {
        assert_eq!(error_of("W12345"), Some(ErrorCode::MissingHyphen));
    }

    #[test]
    fn hyphen_must_follow_one_or_two_letters() {
        assert_eq!(error_of("WIEN-12"), Some(ErrorCode::InvalidHyphenPosition));
        assert_eq!(error_of("-W1234"), Some(ErrorCode::InvalidHyphenPosition));
    }

    #[test]
    fn letter_q_is_rejected_after_hyphen_checks() {
        assert_eq!(error_of("WQ-1234"), Some(ErrorCode::InvalidPlateCharacter));
        assert_eq!(error_of("W-Q123"), Some(ErrorCode::InvalidPlateCharacter));
        assert_eq!(error_of("QW1234"), Some(ErrorCode::MissingHyphen));
    }

    #[test]
    fn only_one_hyphen() {
        assert_eq!(error_of("W-1-2345"), Some(ErrorCode::MultipleHyphens));
    }

    #[test]
    fn serial_length_is_bounded() {
        assert_eq!(error_of("W-12"), Some(ErrorCode::InvalidLengthAfterHyphen));
        assert_eq!(
            error_of("W-123456789"),
            Some(ErrorCode::InvalidLengthAfterHyphen)
        );
    }

    #[test]
    fn district_must_be_letters() {
        assert_eq!(error_of("1-ABC"), Some(ErrorCode::InvalidAtPlateFormat));
    }
}
