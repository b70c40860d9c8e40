//! Core value types shared by every stage of validation.
//!
//! - [`PlateQuery`]: the input pair
//! - [`PlateResult`]: the verdict, either a pass or a [`Rejection`]
//! - [`NormalizationPolicy`]: how a rule prepares its input
//!
//! Everything here is an immutable value; nothing is shared between calls.

mod normalize;
mod query;
mod result;

pub use normalize::NormalizationPolicy;
pub use query::PlateQuery;
pub use result::{ErrorCode, PlateResult, Rejection, ResultShapeError, Target};
