//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::document::Document;
use crate::error::ExtractorError;
use crate::form::map_form_fields;
use crate::parser::LabelScanner;
use crate::sanitize::Sanitizer;
use crate::types::{Extraction, ExtractionMethod};
use std::path::Path;
use tracing::{debug, info};

/// The Extractor turns a document into canonical fields
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    scanner: LabelScanner,
    sanitizer: Sanitizer,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let scanner = LabelScanner::new(config.allow_whitespace_separator)?;
        let sanitizer = Sanitizer::new(config.max_value_length, &config.extra_placeholders);
        Ok(Self {
            config,
            scanner,
            sanitizer,
        })
    }

    /// Create an Extractor with default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Load a document from disk, enforcing the size limit
    pub fn load_document(&self, path: impl AsRef<Path>) -> Result<Document, ExtractorError> {
        Document::load(path, self.config.max_document_bytes)
    }

    /// Extract fields from a loaded document
    ///
    /// Form widgets are authoritative when at least one of them maps to a
    /// field with a real answer. A blank form template falls through to
    /// scanning the text layer.
    pub fn extract(&self, document: &Document) -> Extraction {
        let form_field_count = document.form_fields().len();
        let raw_text_length = document.text().chars().count();

        if form_field_count > 0 {
            let fields = map_form_fields(document.form_fields(), &self.sanitizer);
            if !fields.is_empty() {
                info!(
                    source = %document.source(),
                    fields = fields.len(),
                    "Extracted fields from form widgets"
                );
                return Extraction {
                    fields,
                    method: ExtractionMethod::FormFields,
                    raw_text_length,
                    form_field_count,
                    source: document.source().to_string(),
                };
            }
            debug!(
                source = %document.source(),
                form_field_count,
                "Form widgets hold no answers, scanning text"
            );
        }

        let fields = self.scanner.scan(document.text(), &self.sanitizer);
        info!(
            source = %document.source(),
            fields = fields.len(),
            "Extracted fields from text labels"
        );
        Extraction {
            fields,
            method: ExtractionMethod::TextLabels,
            raw_text_length,
            form_field_count,
            source: document.source().to_string(),
        }
    }

    /// Load and extract a document in one step
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Extraction, ExtractorError> {
        let document = self.load_document(path)?;
        let extraction = self.extract(&document);
        debug!(
            method = %extraction.method,
            raw_text_length = extraction.raw_text_length,
            form_field_count = extraction.form_field_count,
            "Extraction diagnostics"
        );
        Ok(extraction)
    }

    /// Extract fields from text held in memory
    pub fn extract_text(&self, source: &str, text: &str) -> Extraction {
        self.extract(&Document::from_text(source, text))
    }
}
