//! Czech Republic: regional series plates and `EL` electric-vehicle plates.

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static ELECTRIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^EL[1-9]([0-9]{2}[A-Z]{2}|[A-Z]{2}[0-9]{2})$")
        .expect("valid Czech electric plate pattern")
});

const PROHIBITED_LETTERS: [char; 6] = ['G', 'I', 'J', 'O', 'Q', 'W'];

pub fn rule() -> CountryRule {
    CountryRule::new("cz", "Czech Republic", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if plate.starts_with("EL") && !ELECTRIC.is_match(plate) {
        return PlateResult::invalid(
            ErrorCode::InvalidCzElectricPlateFormat,
            "Invalid Czech electric vehicle plate format (ELNNXX or ELXXNN)",
        );
    }

    if plate.contains(PROHIBITED_LETTERS) {
        return PlateResult::invalid(
            ErrorCode::ProhibitedCzLetters,
            "Czech plate must not include the letters G, I, J, O, Q, W",
        );
    }

    let len = plate.chars().count();

    if len == 8 && plate.contains("CH") {
        return PlateResult::invalid(
            ErrorCode::ProhibitedCzChCombination,
            "Czech plate with 8 characters must not include CH",
        );
    }

    if (7..=8).contains(&len) && !plate.chars().any(|c| c.is_ascii_digit()) {
        return PlateResult::invalid(
            ErrorCode::MissingCzDigit,
            "Czech plate must include at least one digit",
        );
    }

    PlateResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(plate: &str) -> Option<ErrorCode> {
        rule().validate(plate).error()
    }

    #[test]
    fn accepts_regional_series() {
        assert!(rule().validate("1A23456").is_valid());
        assert!(rule().validate("5T87654").is_valid());
    }

    #[test]
    fn accepts_electric_plates_in_both_orders() {
        assert!(rule().validate("EL123AB").is_valid());
        assert!(rule().validate("EL1AB23").is_valid());
    }

    #[test]
    fn malformed_electric_plate_is_reported_first() {
        assert_eq!(
            error_of("EL12345"),
            Some(ErrorCode::InvalidCzElectricPlateFormat)
        );
        assert_eq!(error_of("EL0AB12"), Some(ErrorCode::InvalidCzElectricPlateFormat));
    }

    #[test]
    fn prohibited_letters() {
        assert_eq!(error_of("1AG2345"), Some(ErrorCode::ProhibitedCzLetters));
        assert_eq!(error_of("2W12345"), Some(ErrorCode::ProhibitedCzLetters));
    }

    #[test]
    fn ch_only_prohibited_on_eight_characters() {
        assert_eq!(error_of("1ACH2345"), Some(ErrorCode::ProhibitedCzChCombination));
        assert!(rule().validate("1CH2345").is_valid());
    }

    #[test]
    fn long_plates_need_a_digit() {
        assert_eq!(error_of("ABCDEFH"), Some(ErrorCode::MissingCzDigit));
        assert!(rule().validate("ABCDEF").is_valid());
    }
}
