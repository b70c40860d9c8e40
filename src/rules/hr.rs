//! Croatia: city code followed by the registration number (`ZG1234AB`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

/// 2 city letters, 3-4 digits, 1-2 letters.
static STANDARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-PR-VZŽŠČĐ]{2}[0-9]{3,4}[A-PR-VZŽŠČĐ]{1,2}$")
        .expect("valid Croatian standard plate pattern")
});

/// 2 city letters, 3-7 alphanumerics (personalised plates).
static NON_STANDARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZŽŠČĐ]{2}[A-ZŽŠČĐ0-9]{3,7}$")
        .expect("valid Croatian personalised plate pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("hr", "Croatia", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if STANDARD.is_match(plate) || NON_STANDARD.is_match(plate) {
        return PlateResult::valid();
    }

    PlateResult::invalid(ErrorCode::InvalidHrPlateFormat, "Invalid Croatian plate format")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_and_personalised() {
        assert!(rule().validate("ZG1234AB").is_valid());
        assert!(rule().validate("ST123A").is_valid());
        assert!(rule().validate("ZG123").is_valid());
        assert!(rule().validate("RIMARKO1").is_valid());
    }

    #[test]
    fn accepts_croatian_letters_when_called_directly() {
        assert!(rule().validate("ŠI1234Č").is_valid());
    }

    #[test]
    fn rejects_bad_city_code_or_length() {
        let result = rule().validate("1G12345");
        assert_eq!(result.error(), Some(ErrorCode::InvalidHrPlateFormat));
        assert!(!rule().validate("ZG12").is_valid());
    }
}
