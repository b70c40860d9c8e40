//! Registry build errors.

use thiserror::Error;

/// Errors that can occur when building a [`RuleRegistry`](super::RuleRegistry).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("Country code {0:?} is registered more than once")]
    DuplicateCountry(String),

    #[error("Country code {0:?} must be two lowercase ASCII letters")]
    InvalidCountryCode(String),

    #[error("No rules registered. Add at least one rule or start from RegistryBuilder::european()")]
    Empty,
}
