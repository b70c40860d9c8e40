//! Common pre-validation applied before any country rule.
//!
//! Checks short-circuit in a fixed order: country present, plate present,
//! length within bounds, then character set. Case is never changed here, so a
//! lowercase plate fails the character-set check.

use crate::core::{ErrorCode, Rejection};

pub const MIN_PLATE_LEN: usize = 3;
pub const MAX_PLATE_LEN: usize = 9;

/// Run the shared checks (pure). `Ok` means the plate may go to a country rule.
///
/// Length is counted in UTF-16 code units so that limits agree with browser and
/// JavaScript clients validating the same field.
pub fn check(country: &str, plate: &str) -> Result<(), Rejection> {
    if country.is_empty() {
        return Err(Rejection::country(
            ErrorCode::MissingParams,
            "Plate country are required",
        ));
    }

    if plate.is_empty() {
        return Err(Rejection::plate(ErrorCode::MissingParams, "Plate are required"));
    }

    let len = plate.encode_utf16().count();
    if !(MIN_PLATE_LEN..=MAX_PLATE_LEN).contains(&len) {
        return Err(Rejection::plate(
            ErrorCode::InvalidPlateLength,
            "Plate must be between 3 and 9 characters long",
        ));
    }

    if !plate
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Rejection::plate(
            ErrorCode::InvalidPlateFormat,
            "Plate can only contain uppercase letters, numbers and sometimes hyphen",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Target;

    fn rejection(country: &str, plate: &str) -> Rejection {
        check(country, plate).unwrap_err()
    }

    #[test]
    fn country_is_checked_before_plate() {
        let r = rejection("", "");
        assert_eq!(r.error, ErrorCode::MissingParams);
        assert_eq!(r.target, Target::Country);
    }

    #[test]
    fn missing_plate_targets_plate() {
        let r = rejection("at", "");
        assert_eq!(r.error, ErrorCode::MissingParams);
        assert_eq!(r.target, Target::Plate);
        assert_eq!(r.message, "Plate are required");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert_eq!(rejection("at", "AB").error, ErrorCode::InvalidPlateLength);
        assert_eq!(rejection("at", "ABCDEFGHIJ").error, ErrorCode::InvalidPlateLength);
        assert!(check("at", "ABC").is_ok());
        assert!(check("at", "ABCDEFGHI").is_ok());
    }

    #[test]
    fn length_is_checked_before_characters() {
        assert_eq!(rejection("at", "a@").error, ErrorCode::InvalidPlateLength);
    }

    #[test]
    fn astral_characters_count_twice() {
        // 8 chars, 9 UTF-16 units: within bounds, fails on characters
        assert_eq!(rejection("at", "ABCDEFG😀").error, ErrorCode::InvalidPlateFormat);
        // 9 chars, 10 UTF-16 units
        assert_eq!(rejection("at", "ABCDEFGH😀").error, ErrorCode::InvalidPlateLength);
    }

    #[test]
    fn only_uppercase_digits_and_hyphen() {
        assert_eq!(rejection("at", "AB@123").error, ErrorCode::InvalidPlateFormat);
        assert_eq!(rejection("at", "abc123").error, ErrorCode::InvalidPlateFormat);
        assert_eq!(rejection("de", "MÜ-AB12").error, ErrorCode::InvalidPlateFormat);
        assert_eq!(rejection("at", "AB 123").error, ErrorCode::InvalidPlateFormat);
        assert!(check("at", "W-12345").is_ok());
    }
}
