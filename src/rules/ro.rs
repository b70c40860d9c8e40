//! Romania: Bucharest (`B123ABC`) and county (`CJ12ABC`) plates.

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static BUCHAREST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^B[0-9]{2,3}[A-HJ-NPR-Z][A-Z]{2}$").expect("valid Bucharest plate pattern")
});

static COUNTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-HJ-NPR-Z][A-Z]{2}$").expect("valid Romanian county pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("ro", "Romania", NormalizationPolicy::Raw, check)
}

pub fn check(plate: &str) -> PlateResult {
    if is_bucharest(plate) || COUNTY.is_match(plate) {
        return PlateResult::valid();
    }

    PlateResult::invalid(
        ErrorCode::InvalidRoPlateFormat,
        "Invalid Romanian plate format (BNNNLL or LLNNNL)",
    )
}

fn is_bucharest(plate: &str) -> bool {
    let mut chars = plate.chars();
    chars.next() == Some('B')
        && chars.next().is_some_and(|c| c.is_ascii_digit())
        && BUCHAREST.is_match(plate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bucharest_plates() {
        assert!(rule().validate("B123ABC").is_valid());
        assert!(rule().validate("B12ABC").is_valid());
    }

    #[test]
    fn accepts_county_plates() {
        assert!(rule().validate("CJ12ABC").is_valid());
        assert!(rule().validate("BV99XYZ").is_valid());
    }

    #[test]
    fn series_cannot_start_with_i_or_o() {
        assert_eq!(
            rule().validate("CJ12IBC").error(),
            Some(ErrorCode::InvalidRoPlateFormat)
        );
        assert!(!rule().validate("B12OBC").is_valid());
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert!(!rule().validate("B1234AB").is_valid());
        assert!(!rule().validate("CJ1ABC").is_valid());
    }

    #[test]
    fn input_is_not_uppercased() {
        assert!(!rule().validate("cj12abc").is_valid());
    }
}
