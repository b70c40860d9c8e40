//! Country-specific plate grammars.
//!
//! Each submodule encodes one country's official format as a single pass of
//! independent checks with early return, and exposes it as a [`CountryRule`]
//! through its `rule()` constructor. Rules share no state and never call each
//! other; every pattern is compiled once into an immutable static.
//!
//! # Example
//!
//! ```rust
//! use platecheck::rules;
//!
//! let hungary = rules::hu::rule();
//! assert_eq!(hungary.code(), "hu");
//! assert!(hungary.validate("abc123").is_valid());
//! ```

use crate::core::{NormalizationPolicy, PlateResult};
use std::fmt;

pub mod at;
pub mod bg;
pub mod ch;
pub mod cz;
pub mod de;
pub mod hr;
pub mod hu;
pub mod lu;
pub mod pl;
pub mod ro;
pub mod si;
pub mod sk;
pub mod ua;

/// Type alias for rule check functions.
///
/// A check receives the plate after the rule's [`NormalizationPolicy`] has been applied.
pub type RuleCheck = Box<dyn Fn(&str) -> PlateResult + Send + Sync>;

/// A country's plate grammar, keyed by its lowercase ISO 3166-1 alpha-2 code.
pub struct CountryRule {
    code: &'static str,
    country: &'static str,
    policy: NormalizationPolicy,
    check: RuleCheck,
}

impl CountryRule {
    pub fn new<F>(
        code: &'static str,
        country: &'static str,
        policy: NormalizationPolicy,
        check: F,
    ) -> Self
    where
        F: Fn(&str) -> PlateResult + Send + Sync + 'static,
    {
        Self {
            code,
            country,
            policy,
            check: Box::new(check),
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// English country name.
    pub fn country(&self) -> &'static str {
        self.country
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    /// Normalize per policy, then run the country checks (pure).
    pub fn validate(&self, plate: &str) -> PlateResult {
        let normalized = self.policy.apply(plate);
        (self.check)(&normalized)
    }
}

impl fmt::Debug for CountryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryRule")
            .field("code", &self.code)
            .field("country", &self.country)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Every built-in rule, in registration order.
pub fn european() -> Vec<CountryRule> {
    vec![
        at::rule(),
        bg::rule(),
        ch::rule(),
        cz::rule(),
        de::rule(),
        hr::rule(),
        hu::rule(),
        lu::rule(),
        pl::rule(),
        ro::rule(),
        si::rule(),
        sk::rule(),
        ua::rule(),
    ]
}
