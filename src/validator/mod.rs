//! Plate validation entry points.
//!
//! A [`PlateValidator`] runs the [gatekeeper](crate::gatekeeper) and then
//! dispatches to the country rule in its [`RuleRegistry`]. Validation is pure:
//! the same query always yields the same verdict, and a validator can be shared
//! freely between threads.

pub mod batch;
pub mod builder;
pub mod policy;

pub use batch::BatchRejection;
pub use builder::ValidatorBuilder;
pub use policy::UnknownCountryPolicy;

use crate::core::{ErrorCode, PlateQuery, PlateResult, Rejection};
use crate::gatekeeper;
use crate::registry::RuleRegistry;
use std::sync::LazyLock;

static EUROPEAN: LazyLock<PlateValidator> = LazyLock::new(PlateValidator::new);

/// Validate a plate with the built-in European rules.
///
/// Unknown country codes are accepted. Never panics.
///
/// # Example
///
/// ```rust
/// use platecheck::{validate_vehicle_plate, ErrorCode, PlateQuery, Target};
///
/// assert!(validate_vehicle_plate(&PlateQuery::new("hu", "ABC123")).is_valid());
///
/// let missing = validate_vehicle_plate(&PlateQuery::new("", "ABC123"));
/// assert_eq!(missing.error(), Some(ErrorCode::MissingParams));
/// assert_eq!(missing.target(), Target::Country);
/// ```
pub fn validate_vehicle_plate(query: &PlateQuery) -> PlateResult {
    EUROPEAN.validate(query)
}

/// Gatekeeper plus country rule dispatch over a fixed registry.
#[derive(Debug)]
pub struct PlateValidator {
    pub(crate) registry: RuleRegistry,
    pub(crate) unknown_country: UnknownCountryPolicy,
}

impl PlateValidator {
    /// Validator over the European registry, accepting unknown countries.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn unknown_country_policy(&self) -> UnknownCountryPolicy {
        self.unknown_country
    }

    pub fn validate(&self, query: &PlateQuery) -> PlateResult {
        self.validate_parts(&query.country, &query.plate)
    }

    /// Validate without building a [`PlateQuery`].
    pub fn validate_parts(&self, country: &str, plate: &str) -> PlateResult {
        let result = self.run(country, plate);
        if let PlateResult::Invalid(rejection) = &result {
            tracing::debug!(
                country,
                error = %rejection.error,
                target = %rejection.target,
                "plate rejected"
            );
        }
        result
    }

    fn run(&self, country: &str, plate: &str) -> PlateResult {
        if let Err(rejection) = gatekeeper::check(country, plate) {
            return rejection.into();
        }

        if let Some(rule) = self.registry.get(country) {
            tracing::trace!(country, rule = rule.country(), "dispatching to country rule");
            return rule.validate(plate);
        }

        tracing::trace!(country, policy = ?self.unknown_country, "no rule for country");
        match self.unknown_country {
            UnknownCountryPolicy::Accept => PlateResult::valid(),
            UnknownCountryPolicy::Reject => Rejection::country(
                ErrorCode::UnsupportedCountry,
                "Plate country is not supported",
            )
            .into(),
        }
    }
}

impl Default for PlateValidator {
    fn default() -> Self {
        Self::new()
    }
}
