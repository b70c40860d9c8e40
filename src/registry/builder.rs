//! Builder API for assembling a rule registry.

use crate::registry::error::RegistryError;
use crate::registry::RuleRegistry;
use crate::rules::{self, CountryRule};
use std::collections::HashMap;

/// Builder for creating a [`RuleRegistry`].
///
/// # Example
///
/// ```rust
/// use platecheck::registry::RegistryBuilder;
///
/// let registry = RegistryBuilder::european()
///     .without("ch")
///     .build()
///     .unwrap();
///
/// assert!(registry.is_supported("at"));
/// assert!(!registry.is_supported("ch"));
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    rules: Vec<CountryRule>,
}

impl RegistryBuilder {
    /// Start with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Start with every built-in European rule.
    pub fn european() -> Self {
        Self {
            rules: rules::european(),
        }
    }

    /// Add a rule
    pub fn register(mut self, rule: CountryRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Drop every rule registered under `code`
    pub fn without(mut self, code: &str) -> Self {
        self.rules.retain(|rule| rule.code() != code);
        self
    }

    /// Build the registry, rejecting malformed or duplicate codes.
    pub fn build(self) -> Result<RuleRegistry, RegistryError> {
        if self.rules.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut rules = HashMap::with_capacity(self.rules.len());
        for rule in self.rules {
            let code = rule.code();
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(RegistryError::InvalidCountryCode(code.to_string()));
            }
            if rules.insert(code, rule).is_some() {
                return Err(RegistryError::DuplicateCountry(code.to_string()));
            }
        }

        tracing::debug!(rules = rules.len(), "plate rule registry built");
        Ok(RuleRegistry { rules })
    }
}
