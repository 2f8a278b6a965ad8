//! FNOL Validator
//!
//! Checks extracted fields against a reference record for quality control.
//!
//! Expected files are JSON Lines: one object per line, keyed by field name,
//! with two optional metadata keys. `file` names the document a record belongs
//! to and `expectedRoute` names the route its author expects. Comparison runs
//! one way. Every field the record names is looked up in the extraction and
//! reported as missing or inconsistent; extra extracted fields are ignored.
//!
//! # Examples
//!
//! ```no_run
//! use fnol_domain::ExtractedFields;
//! use fnol_validator::Validator;
//!
//! # fn example() -> Result<(), fnol_validator::ValidationError> {
//! let validator = Validator::default_config();
//! let extracted = ExtractedFields::new();
//! let result = validator.validate(&extracted, "expected.jsonl", "claim.pdf")?;
//! println!("missing: {:?}", result.missing);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod expected;
mod validator;

pub use config::{RecordSelection, ValidatorConfig};
pub use error::ValidationError;
pub use expected::{ExpectedRecord, ExpectedRecordSet};
pub use validator::Validator;
