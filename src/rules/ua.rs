//! Ukraine: region letters, four digits, series letters (`AA1234BB`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABCEHIKMOPTX]{2}[0-9]{4}[ABCDEFGHIJKLMNOPQRSTUVXYZ]{2}$")
        .expect("valid Ukrainian plate pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("ua", "Ukraine", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if !FORMAT.is_match(plate) {
        return PlateResult::invalid(
            ErrorCode::InvalidUaPlateFormat,
            "Invalid Ukrainian plate format (LLNNNNLL)",
        );
    }

    PlateResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_region_and_series() {
        assert!(rule().validate("AA1234BB").is_valid());
        assert!(rule().validate("kx0001ab").is_valid());
    }

    #[test]
    fn region_letters_are_restricted() {
        assert_eq!(
            rule().validate("AD1234BB").error(),
            Some(ErrorCode::InvalidUaPlateFormat)
        );
    }

    #[test]
    fn w_is_not_a_series_letter() {
        assert!(!rule().validate("AA1234BW").is_valid());
    }
}
