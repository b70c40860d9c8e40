//! Per-rule input normalization.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a country rule prepares the plate before matching.
///
/// The gatekeeper never changes case, so this only makes a difference when a
/// rule is called directly with unchecked input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Match the input exactly as given.
    Raw,
    /// Uppercase, then strip surrounding whitespace.
    UpperTrim,
}

impl NormalizationPolicy {
    /// Apply the policy (pure). Borrows when nothing changes.
    pub fn apply<'a>(&self, plate: &'a str) -> Cow<'a, str> {
        match self {
            Self::Raw => Cow::Borrowed(plate),
            Self::UpperTrim => {
                let trimmed = plate.trim();
                if trimmed.chars().any(char::is_lowercase) {
                    Cow::Owned(trimmed.to_uppercase())
                } else {
                    Cow::Borrowed(trimmed)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_leaves_input_untouched() {
        assert_eq!(NormalizationPolicy::Raw.apply(" ab-12 "), " ab-12 ");
    }

    #[test]
    fn upper_trim_uppercases_and_trims() {
        assert_eq!(NormalizationPolicy::UpperTrim.apply(" ab-12 "), "AB-12");
        assert_eq!(NormalizationPolicy::UpperTrim.apply("wien-ä1"), "WIEN-Ä1");
    }

    #[test]
    fn upper_trim_borrows_clean_input() {
        let normalized = NormalizationPolicy::UpperTrim.apply("AB123");
        assert!(matches!(normalized, Cow::Borrowed("AB123")));
    }
}
