//! Core validation logic

use crate::config::{RecordSelection, ValidatorConfig};
use crate::error::ValidationError;
use crate::expected::{ExpectedRecord, ExpectedRecordSet};
use fnol_domain::{ExtractedFields, ValidationResult};
use std::path::Path;
use tracing::{debug, info};

/// The Validator compares an extraction against an expected record
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a new Validator
    pub fn new(config: ValidatorConfig) -> Result<Self, ValidationError> {
        config.validate().map_err(ValidationError::Config)?;
        Ok(Self { config })
    }

    /// Create a Validator with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ValidatorConfig::default(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Load an expected file
    ///
    /// With [`RecordSelection::First`] only the first record is parsed, so
    /// malformed later lines do not fail validation.
    pub fn load_expected(&self, path: impl AsRef<Path>) -> Result<ExpectedRecordSet, ValidationError> {
        match self.config.selection {
            RecordSelection::First => ExpectedRecordSet::load_first(path),
            RecordSelection::ByDocument => ExpectedRecordSet::load(path, self.config.max_records),
        }
    }

    /// Validate an extraction against the record selected for `document`
    pub fn validate(
        &self,
        extracted: &ExtractedFields,
        expected_path: impl AsRef<Path>,
        document: impl AsRef<Path>,
    ) -> Result<ValidationResult, ValidationError> {
        let set = self.load_expected(expected_path)?;
        let record = set.select(self.config.selection, document.as_ref())?;
        debug!(
            line = record.line,
            document = ?record.document,
            selection = %self.config.selection,
            "Selected expected record"
        );

        let result = Self::compare(extracted, record);
        info!(
            missing = result.missing.len(),
            inconsistent = result.inconsistent.len(),
            "Validation complete"
        );
        Ok(result)
    }

    /// Compare an extraction against one record
    ///
    /// Only fields the record names are checked. Fields found by the
    /// extractor that the record does not mention are ignored.
    pub fn compare(extracted: &ExtractedFields, record: &ExpectedRecord) -> ValidationResult {
        ValidationResult::compare(extracted, &record.fields).with_expected_route(record.expected_route)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::default_config()
    }
}
