//! Poland: 2-3 letter district code followed by 4-5 characters (`WA12345`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-PR-Z]{2,3}[A-PR-Z0-9]{4,5}$").expect("valid Polish plate pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("pl", "Poland", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if plate.contains('Q') {
        return PlateResult::invalid(
            ErrorCode::InvalidPlPlateFormat,
            "Polish plates cannot contain the letter 'Q'",
        );
    }

    if !(4..=8).contains(&plate.chars().count()) {
        return PlateResult::invalid(
            ErrorCode::InvalidPlPlateFormat,
            "Polish plates must be between 4 and 8 characters long",
        );
    }

    if FORMAT.is_match(plate) {
        return PlateResult::valid();
    }

    PlateResult::invalid(ErrorCode::InvalidPlPlateFormat, "Invalid Polish plate format")
}
