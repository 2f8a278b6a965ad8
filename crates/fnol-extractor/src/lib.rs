//! FNOL Extractor
//!
//! Turns a First Notice of Loss document into canonical fields.
//!
//! # Overview
//!
//! Two extraction paths exist. PDF forms are read through their AcroForm
//! widgets, which hold exactly what the reporter typed. Everything else (text
//! files, flattened PDFs, blank form templates) is scanned line by line for
//! `Label: value` pairs. Values that look like template text are dropped, so a
//! field is either a real answer or absent.
//!
//! # Architecture
//!
//! ```text
//! bytes → Document → { form widgets | text lines } → Sanitizer → ExtractedFields
//! ```
//!
//! # Example Usage
//!
//! ```
//! use fnol_domain::FieldName;
//! use fnol_extractor::{Extractor, ExtractionMethod};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::default_config()?;
//! let extraction = extractor.extract_text(
//!     "memo",
//!     "Policy Number: ABC123\nDate of Loss: 2024-01-05\n",
//! );
//!
//! assert_eq!(extraction.method, ExtractionMethod::TextLabels);
//! assert_eq!(extraction.fields.get(FieldName::PolicyNumber), Some("ABC123"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod extractor;
mod form;
mod labels;
mod parser;
mod sanitize;
mod types;


pub use config::ExtractorConfig;
pub use document::{Document, DocumentKind, FormField};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use form::normalize_widget_name;
pub use labels::{field_for_label, labels_for, FieldLabels, LABEL_TABLE};
pub use parser::LabelScanner;
pub use sanitize::Sanitizer;
pub use types::{Extraction, ExtractionMethod};
