//! Slovenia: registration-area code plus a positional or personalised serial.
//!
//! Checks run in order:
//!
//! 1. the first two characters must be a known registration area
//! 2. the plate must not contain a confusable pair (`I1`, `B8`, `G6`)
//! 3. the rest must match one of the diplomatic, six-character, seven-character
//!    or personalised shapes
//!
//! Positional serials use the letters `A-Z` without `I` and `O`.

use crate::core::{ErrorCode, NormalizationPolicy, PlateResult};
use crate::rules::CountryRule;
use regex::Regex;
use std::sync::LazyLock;

const REGION_CODES: [&str; 11] = [
    "CE", "GO", "KK", "KP", "KR", "LJ", "MB", "MS", "NM", "PO", "SG",
];

const PROHIBITED_COMBINATIONS: [&str; 3] = ["I1", "B8", "G6"];

static DIPLOMATIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(CMD|CD|CC|M)[0-9]{3,6}$").expect("valid Slovenian diplomatic pattern")
});

static SIX_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z]{2}(([A-HJ-NP-Z]{2}[0-9]{2})|([0-9]{2}[A-HJ-NP-Z]{2})|([0-9][A-HJ-NP-Z]{2}[0-9])|([0-9]{3}[A-HJ-NP-Z]))$",
    )
    .expect("valid Slovenian six-character pattern")
});

static SEVEN_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z]{2}(([0-9]{3}[A-HJ-NP-Z]{2})|([0-9]{2}[A-HJ-NP-Z]{3})|([A-HJ-NP-Z]{2}[0-9]{3})|([A-HJ-NP-Z]{3}[0-9]{2})|([0-9][A-HJ-NP-Z]{3}[0-9]))$",
    )
    .expect("valid Slovenian seven-character pattern")
});

pub fn rule() -> CountryRule {
    CountryRule::new("si", "Slovenia", NormalizationPolicy::UpperTrim, check)
}

pub fn check(plate: &str) -> PlateResult {
    let split = plate.char_indices().nth(2).map_or(plate.len(), |(i, _)| i);
    let (region, serial) = plate.split_at(split);

    if !REGION_CODES.contains(&region) {
        return PlateResult::invalid(
            ErrorCode::InvalidSiPlatePrefix,
            "Plate must start with a valid Slovenian region code.",
        );
    }

    if PROHIBITED_COMBINATIONS
        .iter()
        .any(|combination| plate.contains(combination))
    {
        return PlateResult::invalid(
            ErrorCode::ProhibitedSiPlateCombination,
            "Plate contains prohibited letter combinations.",
        );
    }

    if DIPLOMATIC.is_match(plate) {
        return PlateResult::valid();
    }

    let len = plate.chars().count();
    if (len == 6 && SIX_CHAR.is_match(plate)) || (len == 7 && SEVEN_CHAR.is_match(plate)) {
        return PlateResult::valid();
    }

    if is_personalised(serial) {
        return PlateResult::valid();
    }

    PlateResult::invalid(
        ErrorCode::InvalidSiPlateFormat,
        "Invalid Slovenian plate format.",
    )
}

/// 3-5 alphanumerics, at least one letter, never mixing `O` with `0`.
fn is_personalised(serial: &str) -> bool {
    (3..=5).contains(&serial.chars().count())
        && serial.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && !serial.chars().all(|c| c.is_ascii_digit())
        && !(serial.contains('O') && serial.contains('0'))
}
