//! Prompt construction for routing explanations

use fnol_domain::{ExtractedFields, FieldName, RoutingDecision, ValidationResult};

const SYSTEM_PROMPT: &str = "You are an insurance claims triage assistant. \
A deterministic rules engine has already chosen the route for a First Notice of Loss. \
Explain that decision to a claims handler in two or three plain sentences. \
Do not suggest a different route and do not invent facts that are not listed.";

/// Builds the prompts sent to the LLM for one claim
///
/// The raw document text is never included; only the extracted fields and
/// the decision are.
#[derive(Debug, Clone)]
pub struct ReasoningPrompt<'a> {
    fields: &'a ExtractedFields,
    missing: &'a [FieldName],
    decision: &'a RoutingDecision,
    validation: Option<&'a ValidationResult>,
    raw_text_length: usize,
}

impl<'a> ReasoningPrompt<'a> {
    /// Create a prompt for a routed claim
    pub fn new(
        fields: &'a ExtractedFields,
        missing: &'a [FieldName],
        decision: &'a RoutingDecision,
    ) -> Self {
        Self {
            fields,
            missing,
            decision,
            validation: None,
            raw_text_length: 0,
        }
    }

    /// Include validation discrepancies
    pub fn with_validation(mut self, validation: Option<&'a ValidationResult>) -> Self {
        self.validation = validation;
        self
    }

    /// Include the size of the source text
    pub fn with_raw_text_length(mut self, length: usize) -> Self {
        self.raw_text_length = length;
        self
    }

    /// System instruction
    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// User message describing the claim and the decision
    pub fn user_prompt(&self) -> String {
        let mut prompt = String::from("Extracted fields:\n");
        if self.fields.is_empty() {
            prompt.push_str("- (none)\n");
        }
        for (field, value) in self.fields {
            prompt.push_str(&format!("- {}: {}\n", field.display_name(), value));
        }

        let missing = if self.missing.is_empty() {
            "none".to_string()
        } else {
            join_names(self.missing)
        };
        prompt.push_str(&format!("\nMissing mandatory fields: {}\n", missing));

        if let Some(validation) = self.validation {
            prompt.push_str(&format!(
                "Validation against the expected record: missing [{}], inconsistent [{}]\n",
                join_names(&validation.missing),
                join_names(&validation.inconsistent)
            ));
        }

        prompt.push_str(&format!(
            "Source document length: {} characters\n\nRoute: {}\nRule: {}\nRule reasoning: {}\n",
            self.raw_text_length, self.decision.route, self.decision.rule, self.decision.reasoning
        ));
        prompt
    }
}

fn join_names(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}
