//! Handling of country codes without a registered rule.

use serde::{Deserialize, Serialize};

/// What to return when the query's country has no rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCountryPolicy {
    /// Treat the plate as valid (the long-standing default)
    #[default]
    Accept,

    /// Reject with `unsupported_country` targeting the country field
    Reject,
}
