//! FNOL Router
//!
//! Assigns every claim exactly one route with a one-sentence justification.
//!
//! Routing happens in two steps. First the mandatory fields are checked; any
//! gap sends the claim to manual review regardless of anything else. Then the
//! ordered rule table in [`rules::RULES`] is evaluated and the first rule that
//! fires decides. When none fires, the claim is fast-tracked by the `default`
//! rule, so routing is total.
//!
//! # Examples
//!
//! ```
//! use fnol_domain::{ExtractedFields, FieldName, Route};
//! use fnol_router::Router;
//!
//! let mut fields = ExtractedFields::new();
//! fields.insert(FieldName::PolicyNumber, "ABC123");
//! fields.insert(FieldName::IncidentDate, "2024-01-05");
//! fields.insert(FieldName::AssetId, "1HGCM82633A004352");
//!
//! let decision = Router::default_config().route(&fields);
//! assert_eq!(decision.route, Route::ManualReview);
//! assert_eq!(decision.reasoning, "missing mandatory field(s): claimant name");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod router;
pub mod rules;

pub use config::{RouterConfig, DEFAULT_MANDATORY};
pub use error::RouterError;
pub use router::Router;
