//! Builder API for configuring a validator.

use crate::registry::RuleRegistry;
use crate::validator::policy::UnknownCountryPolicy;
use crate::validator::PlateValidator;

/// Builder for creating a [`PlateValidator`].
///
/// # Example
///
/// ```rust
/// use platecheck::{PlateValidator, UnknownCountryPolicy};
/// use platecheck::registry::RegistryBuilder;
///
/// let validator = PlateValidator::builder()
///     .registry(RegistryBuilder::european().without("ua").build().unwrap())
///     .on_unknown_country(UnknownCountryPolicy::Reject)
///     .build();
///
/// assert!(!validator.validate_parts("ua", "AA1234BB").is_valid());
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    registry: Option<RuleRegistry>,
    unknown_country: UnknownCountryPolicy,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom registry instead of the built-in European one
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set how unknown country codes are handled
    pub fn on_unknown_country(mut self, policy: UnknownCountryPolicy) -> Self {
        self.unknown_country = policy;
        self
    }

    pub fn build(self) -> PlateValidator {
        PlateValidator {
            registry: self.registry.unwrap_or_default(),
            unknown_country: self.unknown_country,
        }
    }
}
