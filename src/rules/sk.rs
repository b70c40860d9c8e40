//! Slovakia: district letters followed by five characters.

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

/// Pre-2023 format: 2 letters, 3 digits, 2 letters.
static LEGACY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{3}[A-Z]{2}$").expect("valid Slovak plate pattern"));

/// Current format: 2 letters, 5 alphanumerics.
static MODERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[A-Z0-9]{5}$").expect("valid Slovak modern plate pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("sk", "Slovakia", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if LEGACY.is_match(plate) || MODERN.is_match(plate) {
        return PlateResult::valid();
    }

    PlateResult::invalid(
        ErrorCode::InvalidSkPlateFormat,
        "Invalid Slovak plate format (LLNNNLL or LLXXXXX)",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_and_modern() {
        assert!(rule().validate("BA123AB").is_valid());
        assert!(rule().validate("BA1A2B3").is_valid());
    }

    #[test]
    fn rejects_other_shapes() {
        for plate in ["B1234AB", "BA12", "BA123ABC"] {
            assert_eq!(
                rule().validate(plate).error(),
                Some(ErrorCode::InvalidSkPlateFormat),
                "{plate}"
            );
        }
    }
}
