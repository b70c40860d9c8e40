//! Validation verdicts.
//!
//! A [`PlateResult`] is either a pass or a [`Rejection`] naming the reason and the
//! input field it is attributed to. The enum makes it impossible to build a verdict
//! whose `valid` flag disagrees with its error fields; the serialized form keeps the
//! flat `{ valid, error, message, target }` shape that API consumers expect.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Input field a verdict is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Plate,
    Country,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plate => "plate",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable tag identifying why a plate was rejected.
///
/// The serialized tags are part of the public contract; callers map them to
/// HTTP statuses or translated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Common pre-validation
    MissingParams,
    InvalidPlateLength,
    InvalidPlateFormat,
    UnsupportedCountry,

    // Hyphenated formats (Austria, Germany)
    MissingHyphen,
    InvalidHyphenPosition,
    InvalidPlateCharacter,
    MultipleHyphens,
    InvalidLengthAfterHyphen,
    /// Austrian format mismatch, serialized as `invalid_au_plate_format`.
    #[serde(rename = "invalid_au_plate_format")]
    InvalidAtPlateFormat,
    InvalidDePlateFormat,

    InvalidBgPlateFormat,

    InvalidCzElectricPlateFormat,
    ProhibitedCzLetters,
    ProhibitedCzChCombination,
    MissingCzDigit,

    InvalidHrPlateFormat,
    InvalidHuPlateFormat,
    InvalidLuPlateFormat,
    InvalidPlPlateFormat,
    InvalidRoPlateFormat,

    InvalidSiPlatePrefix,
    ProhibitedSiPlateCombination,
    InvalidSiPlateFormat,

    InvalidSkPlateFormat,
    InvalidUaPlateFormat,
}

impl ErrorCode {
    /// The stable wire tag, e.g. `"missing_hyphen"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingParams => "missing_params",
            Self::InvalidPlateLength => "invalid_plate_length",
            Self::InvalidPlateFormat => "invalid_plate_format",
            Self::UnsupportedCountry => "unsupported_country",
            Self::MissingHyphen => "missing_hyphen",
            Self::InvalidHyphenPosition => "invalid_hyphen_position",
            Self::InvalidPlateCharacter => "invalid_plate_character",
            Self::MultipleHyphens => "multiple_hyphens",
            Self::InvalidLengthAfterHyphen => "invalid_length_after_hyphen",
            Self::InvalidAtPlateFormat => "invalid_au_plate_format",
            Self::InvalidDePlateFormat => "invalid_de_plate_format",
            Self::InvalidBgPlateFormat => "invalid_bg_plate_format",
            Self::InvalidCzElectricPlateFormat => "invalid_cz_electric_plate_format",
            Self::ProhibitedCzLetters => "prohibited_cz_letters",
            Self::ProhibitedCzChCombination => "prohibited_cz_ch_combination",
            Self::MissingCzDigit => "missing_cz_digit",
            Self::InvalidHrPlateFormat => "invalid_hr_plate_format",
            Self::InvalidHuPlateFormat => "invalid_hu_plate_format",
            Self::InvalidLuPlateFormat => "invalid_lu_plate_format",
            Self::InvalidPlPlateFormat => "invalid_pl_plate_format",
            Self::InvalidRoPlateFormat => "invalid_ro_plate_format",
            Self::InvalidSiPlatePrefix => "invalid_si_plate_prefix",
            Self::ProhibitedSiPlateCombination => "prohibited_si_plate_combination",
            Self::InvalidSiPlateFormat => "invalid_si_plate_format",
            Self::InvalidSkPlateFormat => "invalid_sk_plate_format",
            Self::InvalidUaPlateFormat => "invalid_ua_plate_format",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed verdict: the reason, a fixed English message and the implicated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub error: ErrorCode,
    pub message: Cow<'static, str>,
    pub target: Target,
}

impl Rejection {
    /// Rejection attributed to the plate field.
    pub fn plate(error: ErrorCode, message: &'static str) -> Self {
        Self {
            error,
            message: Cow::Borrowed(message),
            target: Target::Plate,
        }
    }

    /// Rejection attributed to the country field.
    pub fn country(error: ErrorCode, message: &'static str) -> Self {
        Self {
            error,
            message: Cow::Borrowed(message),
            target: Target::Country,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.error, self.target, self.message)
    }
}

/// Outcome of validating a single plate.
///
/// # Example
///
/// ```rust
/// use platecheck::{validate_vehicle_plate, ErrorCode, PlateQuery, Target};
///
/// let result = validate_vehicle_plate(&PlateQuery::new("at", "WQ-1234"));
/// assert!(!result.is_valid());
/// assert_eq!(result.error(), Some(ErrorCode::InvalidPlateCharacter));
/// assert_eq!(result.target(), Target::Plate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ResultShape", try_from = "ResultShape")]
pub enum PlateResult {
    Valid { target: Target },
    Invalid(Rejection),
}

impl PlateResult {
    /// A pass attributed to the plate field, the only success any rule produces.
    pub fn valid() -> Self {
        Self::Valid {
            target: Target::Plate,
        }
    }

    /// Shorthand for a plate-targeted rejection.
    pub fn invalid(error: ErrorCode, message: &'static str) -> Self {
        Self::Invalid(Rejection::plate(error, message))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn error(&self) -> Option<ErrorCode> {
        self.rejection().map(|r| r.error)
    }

    pub fn message(&self) -> Option<&str> {
        self.rejection().map(|r| r.message.as_ref())
    }

    pub fn target(&self) -> Target {
        match self {
            Self::Valid { target } => *target,
            Self::Invalid(rejection) => rejection.target,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid(rejection) => Some(rejection),
        }
    }

    /// Convert into a `Result`, for callers that want `?` propagation.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Valid { .. } => Ok(()),
            Self::Invalid(rejection) => Err(rejection),
        }
    }
}

impl From<Rejection> for PlateResult {
    fn from(rejection: Rejection) -> Self {
        Self::Invalid(rejection)
    }
}

/// Errors raised when a serialized verdict breaks the success/failure shape.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResultShapeError {
    #[error("valid result must have null error and message")]
    UnexpectedError,

    #[error("invalid result requires both error and message")]
    MissingError,
}

/// Flat wire representation shared with non-Rust consumers.
#[derive(Debug, Serialize, Deserialize)]
struct ResultShape {
    valid: bool,
    #[serde(default)]
    error: Option<ErrorCode>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    target: Option<Target>,
}

impl From<PlateResult> for ResultShape {
    fn from(result: PlateResult) -> Self {
        match result {
            PlateResult::Valid { target } => ResultShape {
                valid: true,
                error: None,
                message: None,
                target: Some(target),
            },
            PlateResult::Invalid(rejection) => ResultShape {
                valid: false,
                error: Some(rejection.error),
                message: Some(rejection.message.into_owned()),
                target: Some(rejection.target),
            },
        }
    }
}

impl TryFrom<ResultShape> for PlateResult {
    type Error = ResultShapeError;

    fn try_from(shape: ResultShape) -> Result<Self, Self::Error> {
        let target = shape.target.unwrap_or_default();
        match (shape.valid, shape.error, shape.message) {
            (true, None, None) => Ok(PlateResult::Valid { target }),
            (true, _, _) => Err(ResultShapeError::UnexpectedError),
            (false, Some(error), Some(message)) => Ok(PlateResult::Invalid(Rejection {
                error,
                message: Cow::Owned(message),
                target,
            })),
            (false, _, _) => Err(ResultShapeError::MissingError),
        }
    }
}
