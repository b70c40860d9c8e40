//! Switzerland: canton letters followed by the serial (`ZH12345`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;

pub fn rule() -> CountryRule {
    CountryRule::new("ch", "Switzerland", NormalizationPolicy::Raw, check)
}

/// Only the canton prefix is checked: neither of the first two characters may be a digit.
pub fn check(plate: &str) -> PlateResult {
    if plate.chars().take(2).any(|c| c.is_ascii_digit()) {
        return PlateResult::invalid(
            ErrorCode::InvalidPlateFormat,
            "Swiss plate must start with two letters (LLXXXX)",
        );
    }

    PlateResult::valid()
}
