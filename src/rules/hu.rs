//! Hungary: three or four letters followed by three digits (`ABC123`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3,4}[0-9]{3}$").expect("valid Hungarian plate pattern"));

pub fn rule() -> CountryRule {
    CountryRule::new("hu", "Hungary", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if FORMAT.is_match(plate) {
        return PlateResult::valid();
    }

    PlateResult::invalid(
        ErrorCode::InvalidHuPlateFormat,
        "Invalid Hungarian plate format (LLLNNN or LLLLNNN)",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_old_and_new_series() {
        assert!(rule().validate("ABC123").is_valid());
        assert!(rule().validate("AABC123").is_valid());
    }

    #[test]
    fn rejects_other_shapes() {
        for plate in ["AB123", "ABC1234", "ABCDE123", "123ABC"] {
            assert_eq!(
                rule().validate(plate).error(),
                Some(ErrorCode::InvalidHuPlateFormat),
                "{plate}"
            );
        }
    }

    #[test]
    fn repeated_calls_are_independent() {
        let rule = rule();
        for _ in 0..3 {
            assert!(rule.validate("ABC123").is_valid());
        }
    }
}
