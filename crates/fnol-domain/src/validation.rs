//! Validation module - discrepancies between expected and extracted fields

use crate::field::{values_equivalent, ExpectedFields, ExtractedFields, FieldName};
use crate::route::Route;

/// Result of comparing an extraction against an expected record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Expected fields that the extraction did not find (canonical order)
    pub missing: Vec<FieldName>,

    /// Fields found in both whose normalized values differ (canonical order)
    pub inconsistent: Vec<FieldName>,

    /// Route the expected record says the claim should take, if it names one
    pub expected_route: Option<Route>,
}

impl ValidationResult {
    /// Compare extracted fields against expected fields
    ///
    /// The comparison is directional: only keys present in `expected` are
    /// examined, so fields found only by the extractor never appear in the
    /// result.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnol_domain::{FieldMap, FieldName, ValidationResult};
    ///
    /// let mut expected = FieldMap::new();
    /// expected.insert(FieldName::PolicyNumber, "ABC123");
    /// let mut extracted = FieldMap::new();
    /// extracted.insert(FieldName::PolicyNumber, "abc123");
    ///
    /// let result = ValidationResult::compare(&extracted, &expected);
    /// assert!(result.is_clean());
    /// ```
    pub fn compare(extracted: &ExtractedFields, expected: &ExpectedFields) -> Self {
        let mut missing = Vec::new();
        let mut inconsistent = Vec::new();

        for (field, expected_value) in expected.iter() {
            match extracted.get(field) {
                None => missing.push(field),
                Some(actual) if !values_equivalent(field, actual, expected_value) => {
                    inconsistent.push(field)
                }
                Some(_) => {}
            }
        }

        Self {
            missing,
            inconsistent,
            expected_route: None,
        }
    }

    /// Attach the expected route from the record
    pub fn with_expected_route(mut self, route: Option<Route>) -> Self {
        self.expected_route = route;
        self
    }

    /// Whether the extraction matched every expectation
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.inconsistent.is_empty()
    }

    /// Whether the actual route agrees with the expected one
    ///
    /// `None` when the record did not name a route.
    pub fn route_matches(&self, actual: Route) -> Option<bool> {
        self.expected_route.map(|expected| expected == actual)
    }
}
