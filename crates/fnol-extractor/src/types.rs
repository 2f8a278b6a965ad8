//! Extraction result types

use fnol_domain::ExtractedFields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which path produced the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    /// Values read from AcroForm widgets
    FormFields,
    /// Values found by scanning `Label: value` lines
    TextLabels,
}

impl ExtractionMethod {
    /// Stable name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::FormFields => "form-fields",
            ExtractionMethod::TextLabels => "text-labels",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of extracting one document
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Fields found, absent fields omitted
    pub fields: ExtractedFields,

    /// Path that produced `fields`
    pub method: ExtractionMethod,

    /// Length of the document's raw text in characters
    pub raw_text_length: usize,

    /// Number of form widgets the document exposed
    pub form_field_count: usize,

    /// Path or identifier of the document
    pub source: String,
}
