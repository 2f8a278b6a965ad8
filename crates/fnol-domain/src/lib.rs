//! FNOL Domain Layer
//!
//! Core vocabulary for First Notice of Loss intake. This crate has no external
//! dependencies and defines the value types and trait boundaries every other
//! crate in the workspace builds on.
//!
//! ## Key Concepts
//!
//! - **FieldName**: the closed set of canonical claim fields
//! - **FieldMap**: extracted or expected values keyed by canonical field
//! - **Route**: the destination queue assigned to a claim
//! - **RoutingDecision**: a route plus the sentence explaining which rule fired
//! - **ValidationResult**: discrepancies between an expected record and an extraction
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and comparison helpers only
//! - Infrastructure (PDF parsing, HTTP, config files) lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod route;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use field::{
    normalize_value, parse_amount, values_equivalent, ExpectedFields, ExtractedFields, FieldMap,
    FieldName,
};
pub use route::{Route, RoutingDecision};
pub use validation::ValidationResult;
