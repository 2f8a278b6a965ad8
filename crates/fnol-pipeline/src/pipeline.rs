//! Extraction → validation → routing → reasoning → report

use crate::config::FnolConfig;
use crate::error::PipelineError;
use crate::report::OutputReport;
use fnol_domain::traits::LlmProvider;
use fnol_domain::{ExtractedFields, FieldName, RoutingDecision, ValidationResult};
use fnol_extractor::{ExtractionMethod, Extractor};
use fnol_llm::{ChatCompletionsProvider, LlmConfig, LlmError, LlmSettings, ReasoningPrompt};
use fnol_router::Router;
use fnol_validator::Validator;
use std::path::Path;
use tracing::{debug, info, warn};

/// Boxed reasoning provider
pub type ReasoningProvider = Box<dyn LlmProvider<Error = LlmError>>;

/// Result of processing one document
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// The report
    pub report: OutputReport,

    /// Steps that degraded without stopping the pipeline
    pub warnings: Vec<String>,

    /// Extraction path used
    pub method: ExtractionMethod,

    /// Raw text length of the document
    pub raw_text_length: usize,

    /// Name of the routing rule that fired
    pub rule: &'static str,
}

/// Runs one document through every stage
pub struct Pipeline {
    extractor: Extractor,
    validator: Validator,
    router: Router,
    reasoning: Option<ReasoningProvider>,
    require_validation: bool,
    setup_warnings: Vec<String>,
}

impl Pipeline {
    /// Build the stages from configuration, without LLM reasoning
    pub fn new(config: &FnolConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            extractor: Extractor::new(config.extractor.clone())?,
            validator: Validator::new(config.validation.clone())?,
            router: Router::new(config.router.clone())?,
            reasoning: None,
            require_validation: false,
            setup_warnings: Vec::new(),
        })
    }

    /// Use `provider` to explain routing decisions
    pub fn with_reasoning_provider(mut self, provider: ReasoningProvider) -> Self {
        self.reasoning = Some(provider);
        self
    }

    /// Configure the chat completions provider from the environment
    ///
    /// Missing credentials quietly leave reasoning off. Any other setup
    /// failure is reported as a warning with every outcome.
    pub fn with_env_reasoning(self, config: &LlmConfig) -> Self {
        self.with_reasoning_from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Configure the chat completions provider through a variable lookup
    ///
    /// Behaves like [`Pipeline::with_env_reasoning`] with `lookup` standing
    /// in for the process environment.
    pub fn with_reasoning_from_lookup<F>(mut self, config: &LlmConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if !config.enabled {
            debug!("LLM reasoning disabled by configuration");
            return self;
        }
        let provider = LlmSettings::from_lookup(config, lookup).and_then(ChatCompletionsProvider::new);
        match provider {
            Ok(provider) => {
                info!(model = provider.model_name(), "LLM reasoning enabled");
                self.reasoning = Some(Box::new(provider));
            }
            Err(LlmError::MissingCredentials(reason)) => {
                info!(%reason, "LLM reasoning disabled");
            }
            Err(e) => {
                warn!(error = %e, "LLM reasoning unavailable");
                self.setup_warnings.push(format!("LLM reasoning unavailable: {}", e));
            }
        }
        self
    }

    /// Treat validation failures as fatal
    pub fn require_validation(mut self, required: bool) -> Self {
        self.require_validation = required;
        self
    }

    /// Whether a reasoning provider is configured
    pub fn has_reasoning(&self) -> bool {
        self.reasoning.is_some()
    }

    /// Process one document, optionally validating against an expected file
    pub fn build_output(
        &self,
        document: impl AsRef<Path>,
        expected: Option<&Path>,
    ) -> Result<PipelineOutcome, PipelineError> {
        let document = document.as_ref();
        let mut warnings = self.setup_warnings.clone();

        info!(document = %document.display(), "Processing document");
        let extraction = self.extractor.extract_path(document)?;
        let fields = extraction.fields;

        let validation = match expected {
            Some(expected_path) => self.validate(&fields, expected_path, document, &mut warnings)?,
            None => None,
        };

        let missing = self.router.find_missing(&fields);
        let decision = self.router.route_with_validation(&fields, validation.as_ref());
        info!(route = %decision.route, rule = decision.rule, "Routing complete");

        let llm_reasoning = self.explain(
            &fields,
            &missing,
            &decision,
            validation.as_ref(),
            extraction.raw_text_length,
            &mut warnings,
        );

        let rule = decision.rule;
        let report = OutputReport::new(fields, &missing, decision, validation.as_ref(), llm_reasoning);

        Ok(PipelineOutcome {
            report,
            warnings,
            method: extraction.method,
            raw_text_length: extraction.raw_text_length,
            rule,
        })
    }

    fn validate(
        &self,
        fields: &ExtractedFields,
        expected_path: &Path,
        document: &Path,
        warnings: &mut Vec<String>,
    ) -> Result<Option<ValidationResult>, PipelineError> {
        match self.validator.validate(fields, expected_path, document) {
            Ok(result) => Ok(Some(result)),
            Err(e) if self.require_validation => Err(e.into()),
            Err(e) => {
                warn!(error = %e, "Validation skipped");
                warnings.push(format!("Validation skipped: {}", e));
                Ok(None)
            }
        }
    }

    fn explain(
        &self,
        fields: &ExtractedFields,
        missing: &[FieldName],
        decision: &RoutingDecision,
        validation: Option<&ValidationResult>,
        raw_text_length: usize,
        warnings: &mut Vec<String>,
    ) -> Option<String> {
        let provider = self.reasoning.as_ref()?;
        let prompt = ReasoningPrompt::new(fields, missing, decision)
            .with_validation(validation)
            .with_raw_text_length(raw_text_length);

        debug!(model = provider.model_name(), "Requesting LLM reasoning");
        let result = provider
            .generate(prompt.system_prompt(), &prompt.user_prompt())
            .and_then(|text| {
                let text = text.trim().to_string();
                if text.is_empty() {
                    Err(LlmError::InvalidResponse("empty explanation".to_string()))
                } else {
                    Ok(text)
                }
            });

        match result {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "LLM reasoning unavailable");
                warnings.push(format!("LLM reasoning unavailable: {}", e));
                None
            }
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("extractor", &self.extractor)
            .field("validator", &self.validator)
            .field("router", &self.router)
            .field("reasoning", &self.reasoning.as_ref().map(|p| p.model_name()))
            .field("require_validation", &self.require_validation)
            .finish()
    }
}
