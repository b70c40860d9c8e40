//! Bulgaria: Cyrillic-compatible Latin letters around four digits (`CA1234AB`).

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABEKMHOPCTYX]{1,2}[0-9]{4}[ABEKMHOPCTX]{2}$")
        .expect("valid Bulgarian plate pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("bg", "Bulgaria", NormalizationPolicy::Raw, check)
}

pub fn check(plate: &str) -> PlateResult {
    if !FORMAT.is_match(plate) {
        return PlateResult::invalid(
            ErrorCode::InvalidBgPlateFormat,
            "Invalid Bulgarian plate format (LLNNNNLL)",
        );
    }

    PlateResult::valid()
}
