//! Country rule registry.
//!
//! Maps a lowercase country code to its [`CountryRule`]. The registry is built
//! once and never mutated; lookups are exact and case-sensitive.

pub mod builder;
pub mod error;

pub use builder::RegistryBuilder;
pub use error::RegistryError;

use crate::core::PlateResult;
use crate::rules::{self, CountryRule};
use std::collections::HashMap;

/// Immutable mapping from country code to rule.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: HashMap<&'static str, CountryRule>,
}

impl RuleRegistry {
    /// Registry holding every built-in European rule.
    pub fn european() -> Self {
        let rules = rules::european()
            .into_iter()
            .map(|rule| (rule.code(), rule))
            .collect();
        Self { rules }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn get(&self, code: &str) -> Option<&CountryRule> {
        self.rules.get(code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.rules.contains_key(code)
    }

    /// Registered codes in alphabetical order.
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.rules.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Registered rules in code order.
    pub fn rules(&self) -> impl Iterator<Item = &CountryRule> {
        self.codes()
            .into_iter()
            .filter_map(move |code| self.rules.get(code))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rule registered for `code`, or `None` when the code is unknown.
    pub fn validate(&self, code: &str, plate: &str) -> Option<PlateResult> {
        self.get(code).map(|rule| rule.validate(plate))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::european()
    }
}
