//! FNOL Pipeline
//!
//! Wires the extractor, validator, router and optional LLM reasoning into a
//! single call that turns a document into an [`OutputReport`].
//!
//! # Architecture
//!
//! ```text
//! document → Extractor → (Validator) → Router → (LLM) → OutputReport
//! ```
//!
//! Only extraction failures are fatal. A broken expected file or an
//! unreachable LLM degrades the report and adds a warning to the outcome.
//!
//! # Example Usage
//!
//! ```no_run
//! use fnol_pipeline::{FnolConfig, Pipeline};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FnolConfig::default();
//! let pipeline = Pipeline::new(&config)?.with_env_reasoning(&config.llm);
//!
//! let outcome = pipeline.build_output("claim.pdf", None)?;
//! println!("{}", outcome.report.to_json_pretty()?);
//! for warning in &outcome.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;
mod report;

pub use config::FnolConfig;
pub use error::{ConfigError, PipelineError};
pub use pipeline::{Pipeline, PipelineOutcome, ReasoningProvider};
pub use report::{OutputReport, ValidationReport};
