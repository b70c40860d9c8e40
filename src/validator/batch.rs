//! Batch validation that reports every rejected plate at once.

use crate::core::{PlateQuery, PlateResult, Rejection};
use crate::validator::PlateValidator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A rejection together with the position of the offending query.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRejection {
    pub index: usize,
    pub query: PlateQuery,
    pub rejection: Rejection,
}

impl PlateValidator {
    /// Validate every query, accumulating ALL rejections.
    /// Returns Validation::Success(()) if every plate passes.
    /// Returns Validation::Failure with every rejection otherwise.
    pub fn validate_all(
        &self,
        queries: &[PlateQuery],
    ) -> Validation<(), NonEmptyVec<BatchRejection>> {
        let checks: Vec<Validation<(), NonEmptyVec<BatchRejection>>> = queries
            .iter()
            .enumerate()
            .map(|(index, query)| match self.validate(query) {
                PlateResult::Valid { .. } => Validation::success(()),
                PlateResult::Invalid(rejection) => Validation::fail(BatchRejection {
                    index,
                    query: query.clone(),
                    rejection,
                }),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}
