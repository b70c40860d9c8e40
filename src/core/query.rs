//! Validation input.

use serde::{Deserialize, Serialize};

/// A country code and candidate plate, built fresh by the caller for each check.
///
/// Absent fields deserialize to empty strings, which the gatekeeper reports as
/// `missing_params`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlateQuery {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub plate: String,
}

impl PlateQuery {
    pub fn new(country: impl Into<String>, plate: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            plate: plate.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let query: PlateQuery = serde_json::from_str(r#"{ "plate": "ABC123" }"#).unwrap();
        assert_eq!(query.country, "");
        assert_eq!(query.plate, "ABC123");

        let query: PlateQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, PlateQuery::default());
    }
}
