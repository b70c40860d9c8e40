//! Luxembourg: two letters and four digits, or a purely numeric plate.

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

static LETTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{4}$").expect("valid Luxembourg plate pattern"));

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4,5}$").expect("valid Luxembourg numeric pattern"));

pub fn rule() -> CountryRule {
    CountryRule::new("lu", "Luxembourg", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    if !LETTERED.is_match(plate) && !NUMERIC.is_match(plate) {
        return PlateResult::invalid(
            ErrorCode::InvalidLuPlateFormat,
            "Invalid Luxembourg plate format (LLNNNN or NNNN/NNNNN)",
        );
    }

    PlateResult::valid()
}
