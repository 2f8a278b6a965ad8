//! The ordered routing rule table

use crate::config::RouterConfig;
use fnol_domain::{parse_amount, ExtractedFields, FieldName, Route, ValidationResult};

/// Name of the rule that fires when no table rule does
pub const DEFAULT_RULE: &str = "default";

/// Words that cancel a specialist keyword following them in the same clause
const NEGATIONS: &[&str] = &["no", "not", "without", "never", "none", "denies", "denied"];

/// How many words before a keyword are checked for a negation
const NEGATION_WINDOW: usize = 3;

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Extracted fields
    pub fields: &'a ExtractedFields,
    /// Validation outcome, when validation ran
    pub validation: Option<&'a ValidationResult>,
    /// Missing mandatory fields, canonical order
    pub missing: &'a [FieldName],
    /// Rule parameters
    pub config: &'a RouterConfig,
}

impl RuleContext<'_> {
    fn lowered(&self, field: FieldName) -> Option<String> {
        self.fields.get(field).map(str::to_lowercase)
    }

    fn estimate(&self) -> Option<f64> {
        self.fields.get(FieldName::InitialEstimate).and_then(parse_amount)
    }
}

/// A routing rule: fires when `evaluate` returns a reason
pub struct Rule {
    /// Stable rule name, reported alongside the decision
    pub name: &'static str,
    /// Route assigned when the rule fires
    pub route: Route,
    /// Returns the reasoning sentence when the rule applies
    pub evaluate: fn(&RuleContext<'_>) -> Option<String>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("route", &self.route)
            .finish()
    }
}

/// Rules in priority order; the first that fires decides the route
pub static RULES: &[Rule] = &[
    Rule {
        name: "missing-mandatory",
        route: Route::ManualReview,
        evaluate: missing_mandatory,
    },
    Rule {
        name: "suspected-fraud",
        route: Route::InvestigationFlag,
        evaluate: suspected_fraud,
    },
    Rule {
        name: "validation-inconsistency",
        route: Route::InvestigationFlag,
        evaluate: validation_inconsistency,
    },
    Rule {
        name: "specialist-loss",
        route: Route::SpecialistQueue,
        evaluate: specialist_loss,
    },
    Rule {
        name: "estimate-over-threshold",
        route: Route::ManualReview,
        evaluate: estimate_over_threshold,
    },
    Rule {
        name: "low-estimate",
        route: Route::FastTrack,
        evaluate: low_estimate,
    },
];

/// Reason given when no rule fires
pub fn default_reason(context: &RuleContext<'_>) -> String {
    let estimate = if context.fields.contains(FieldName::InitialEstimate) {
        "initial estimate is not a usable amount"
    } else {
        "no initial estimate provided"
    };
    format!(
        "all mandatory fields present with no fraud, inconsistency or specialist indicators, and {}",
        estimate
    )
}

fn keywords_in<'k>(text: &str, keywords: &'k [String]) -> Vec<&'k str> {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| text.contains(&k.to_lowercase()))
        .collect()
}

/// Keywords with at least one occurrence not negated within its clause
///
/// "no injuries reported" does not count as an injury; "not injured but
/// suffered whiplash" still counts through "whiplash".
fn affirmed_keywords_in<'k>(text: &str, keywords: &'k [String]) -> Vec<&'k str> {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| {
            let needle = k.to_lowercase();
            !needle.is_empty()
                && text
                    .match_indices(needle.as_str())
                    .any(|(start, _)| !is_negated(&text[..start]))
        })
        .collect()
}

fn is_negated(preceding: &str) -> bool {
    let clause = preceding
        .rsplit(['.', ',', ';', ':', '!', '?'])
        .next()
        .unwrap_or(preceding);
    clause
        .split_whitespace()
        .rev()
        .take(NEGATION_WINDOW)
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|word| NEGATIONS.contains(&word))
}

fn missing_mandatory(context: &RuleContext<'_>) -> Option<String> {
    if context.missing.is_empty() {
        return None;
    }
    let names: Vec<&str> = context.missing.iter().map(|f| f.display_name()).collect();
    Some(format!("missing mandatory field(s): {}", names.join(", ")))
}

fn suspected_fraud(context: &RuleContext<'_>) -> Option<String> {
    let description = context.lowered(FieldName::IncidentDescription)?;
    let found = keywords_in(&description, &context.config.fraud_keywords);
    if found.is_empty() {
        return None;
    }
    Some(format!(
        "incident description contains suspicious keyword(s): {}",
        found.join(", ")
    ))
}

fn validation_inconsistency(context: &RuleContext<'_>) -> Option<String> {
    let validation = context.validation?;
    if validation.inconsistent.is_empty() {
        return None;
    }
    let names: Vec<&str> = validation.inconsistent.iter().map(|f| f.display_name()).collect();
    Some(format!(
        "extracted values disagree with the expected record for: {}",
        names.join(", ")
    ))
}

fn specialist_loss(context: &RuleContext<'_>) -> Option<String> {
    let config = context.config;
    let sources = [
        ("claim type", FieldName::ClaimType),
        ("incident description", FieldName::IncidentDescription),
    ];
    let indicators = [
        (&config.injury_keywords, "bodily injury"),
        (&config.total_loss_keywords, "a total loss"),
    ];

    for (keywords, indication) in indicators {
        for (label, field) in sources {
            let Some(text) = context.lowered(field) else {
                continue;
            };
            if let Some(keyword) = affirmed_keywords_in(&text, keywords).first() {
                return Some(format!("{} indicates {} ('{}')", label, indication, keyword));
            }
        }
    }

    let asset_type = context.lowered(FieldName::AssetType)?;
    keywords_in(&asset_type, &config.specialized_asset_types)
        .first()
        .map(|kind| format!("asset type '{}' requires a specialist adjuster", kind))
}

fn estimate_over_threshold(context: &RuleContext<'_>) -> Option<String> {
    let estimate = context.estimate()?;
    let threshold = context.config.fast_track_threshold;
    (estimate >= threshold).then(|| {
        format!(
            "initial estimate of {:.2} meets or exceeds the fast-track threshold of {:.2}",
            estimate, threshold
        )
    })
}

fn low_estimate(context: &RuleContext<'_>) -> Option<String> {
    let estimate = context.estimate()?;
    let threshold = context.config.fast_track_threshold;
    (estimate < threshold).then(|| {
        format!(
            "all mandatory fields present and initial estimate of {:.2} is below the fast-track threshold of {:.2}",
            estimate, threshold
        )
    })
}
