//! The `fnol` configuration file
//!
//! Every section is optional; anything left out takes its default.
//!
//! ```toml
//! [extractor]
//! max_value_length = 200
//!
//! [validation]
//! selection = "by-document"
//!
//! [router]
//! fast_track_threshold = 25000.0
//! mandatory_fields = ["policyNumber", "incidentDate", "claimantName", "assetId"]
//!
//! [llm]
//! enabled = true
//! timeout_secs = 20
//! ```

use crate::error::ConfigError;
use fnol_extractor::ExtractorConfig;
use fnol_llm::LlmConfig;
use fnol_router::RouterConfig;
use fnol_validator::ValidatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FnolConfig {
    /// Field extraction
    pub extractor: ExtractorConfig,

    /// Expected-record validation
    pub validation: ValidatorConfig,

    /// Routing rules
    pub router: RouterConfig,

    /// LLM reasoning
    pub llm: LlmConfig,
}

impl FnolConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: FnolConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |section: &'static str| move |reason: String| ConfigError::Invalid { section, reason };
        self.extractor.validate().map_err(invalid("extractor"))?;
        self.validation.validate().map_err(invalid("validation"))?;
        self.router.validate().map_err(invalid("router"))?;
        self.llm.validate().map_err(invalid("llm"))?;
        Ok(())
    }
}
