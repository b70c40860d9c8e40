//! Platecheck: country-specific validation of European vehicle license plates
//!
//! Validation is a pure, synchronous classification of a `(country, plate)` pair
//! into a verdict. Every query goes through the same two stages:
//!
//! - **Gatekeeper**: presence, length (3-9) and character-set (`A-Z`, `0-9`, `-`)
//!   checks shared by all countries
//! - **Country rules**: a registry mapping lowercase ISO codes to grammars for
//!   Austria, Bulgaria, Switzerland, the Czech Republic, Germany, Croatia,
//!   Hungary, Luxembourg, Poland, Romania, Slovenia, Slovakia and Ukraine
//!
//! Failures are data, never panics: a [`PlateResult`] is either valid or carries
//! a stable [`ErrorCode`], a fixed message and the [`Target`] field to blame.
//!
//! # Example
//!
//! ```rust
//! use platecheck::{validate_vehicle_plate, ErrorCode, PlateQuery};
//!
//! let ok = validate_vehicle_plate(&PlateQuery::new("de", "B-MW1234"));
//! assert!(ok.is_valid());
//!
//! let bad = validate_vehicle_plate(&PlateQuery::new("de", "BMW1234"));
//! assert_eq!(bad.error(), Some(ErrorCode::MissingHyphen));
//!
//! let json = serde_json::to_string(&ok).unwrap();
//! assert_eq!(json, r#"{"valid":true,"error":null,"message":null,"target":"plate"}"#);
//! ```

pub mod core;
pub mod gatekeeper;
pub mod registry;
pub mod rules;
pub mod validator;

// Re-export commonly used types
pub use crate::core::{ErrorCode, NormalizationPolicy, PlateQuery, PlateResult, Rejection, Target};
pub use registry::{RegistryBuilder, RegistryError, RuleRegistry};
pub use rules::CountryRule;
pub use validator::{validate_vehicle_plate, PlateValidator, UnknownCountryPolicy};
