//! Router: mandatory-field check plus the rule table

use crate::config::{RouterConfig, DEFAULT_MANDATORY};
use crate::error::RouterError;
use crate::rules::{default_reason, RuleContext, DEFAULT_RULE, RULES};
use fnol_domain::{ExtractedFields, FieldName, Route, RoutingDecision, ValidationResult};
use tracing::debug;

/// Picks exactly one route for a claim
///
/// Routing is pure: the same fields and validation result always produce the
/// same decision, and a decision is always produced.
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterConfig,
    mandatory: Vec<FieldName>,
}

impl Router {
    /// Create a new Router
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        config.validate().map_err(RouterError::Config)?;
        let mandatory = config.resolve_mandatory().map_err(RouterError::Config)?;
        Ok(Self { config, mandatory })
    }

    /// Create a Router with default configuration
    pub fn default_config() -> Self {
        Self {
            config: RouterConfig::default(),
            mandatory: DEFAULT_MANDATORY.to_vec(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Mandatory fields, canonical order
    pub fn mandatory_fields(&self) -> &[FieldName] {
        &self.mandatory
    }

    /// Mandatory fields absent from `fields`, canonical order
    pub fn find_missing(&self, fields: &ExtractedFields) -> Vec<FieldName> {
        self.mandatory
            .iter()
            .copied()
            .filter(|field| !fields.contains(*field))
            .collect()
    }

    /// Route a claim without validation information
    pub fn route(&self, fields: &ExtractedFields) -> RoutingDecision {
        self.route_with_validation(fields, None)
    }

    /// Route a claim, taking a validation outcome into account when present
    pub fn route_with_validation(
        &self,
        fields: &ExtractedFields,
        validation: Option<&ValidationResult>,
    ) -> RoutingDecision {
        let missing = self.find_missing(fields);
        let context = RuleContext {
            fields,
            validation,
            missing: &missing,
            config: &self.config,
        };

        for rule in RULES {
            if let Some(reasoning) = (rule.evaluate)(&context) {
                debug!(rule = rule.name, route = %rule.route, "Routing rule fired");
                return RoutingDecision::new(rule.route, reasoning, rule.name);
            }
        }

        debug!(rule = DEFAULT_RULE, "No routing rule fired, using default route");
        RoutingDecision::new(Route::FastTrack, default_reason(&context), DEFAULT_RULE)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::default_config()
    }
}
