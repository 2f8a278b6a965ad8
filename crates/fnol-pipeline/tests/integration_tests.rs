//! Integration tests for the Pipeline

use fnol_domain::{FieldName, Route};
use fnol_extractor::{ExtractionMethod, ExtractorError};
use fnol_llm::settings::{API_KEY_VAR, TIMEOUT_VAR};
use fnol_llm::{LlmConfig, MockProvider};
use fnol_pipeline::{FnolConfig, Pipeline, PipelineError};
use fnol_validator::ValidationError;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn pipeline() -> Pipeline {
    Pipeline::new(&FnolConfig::default()).unwrap()
}

fn report_json(outcome: &fnol_pipeline::PipelineOutcome) -> Value {
    serde_json::from_str(&outcome.report.to_json_pretty().unwrap()).unwrap()
}

const COMPLETE_CLAIM: &str = "\
Policy Number: ABC123
Date of Loss: 2024-01-05
Claimant: Jane Doe
VIN: 1HGCM82633A004352
Description: Rear-ended at a stop light
";

#[test]
fn test_missing_claimant_routes_to_manual_review() {
    let doc = write_temp(
        ".txt",
        "Policy Number: ABC123\nDate of Loss: 2024-01-05\nVIN: 1HGCM82633A004352\n",
    );
    let outcome = pipeline().build_output(doc.path(), None).unwrap();

    assert_eq!(outcome.report.missing_fields, vec!["claimant name"]);
    assert_eq!(outcome.report.recommended_route, Route::ManualReview);
    assert_eq!(outcome.method, ExtractionMethod::TextLabels);
    assert!(outcome.warnings.is_empty());

    let json = report_json(&outcome);
    assert_eq!(json["recommendedRoute"], "manual-review");
    assert_eq!(json["missingFields"], serde_json::json!(["claimant name"]));
    assert_eq!(json["extractedFields"]["policyNumber"], "ABC123");
    assert_eq!(json["extractedFields"]["incidentDate"], "2024-01-05");
}

#[test]
fn test_complete_claim_is_fast_tracked() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let outcome = pipeline().build_output(doc.path(), None).unwrap();

    assert!(outcome.report.missing_fields.is_empty());
    assert_eq!(outcome.report.recommended_route, Route::FastTrack);
    assert_eq!(outcome.rule, "default");
    assert!(!outcome.report.reasoning.is_empty());
}

#[test]
fn test_fraud_description_flags_investigation() {
    let doc = write_temp(
        ".txt",
        &COMPLETE_CLAIM.replace("Rear-ended at a stop light", "Witness suspects insurance fraud"),
    );
    let outcome = pipeline().build_output(doc.path(), None).unwrap();

    assert_eq!(outcome.report.recommended_route, Route::InvestigationFlag);
    assert!(outcome.report.reasoning.contains("fraud"));
}

#[test]
fn test_document_without_fields() {
    let doc = write_temp(".txt", "Dear adjuster, please call me back about my car.\n");
    let outcome = pipeline().build_output(doc.path(), None).unwrap();

    assert!(outcome.report.extracted_fields.is_empty());
    assert_eq!(
        outcome.report.missing_fields,
        vec!["policy number", "incident date", "claimant name", "asset identifier"]
    );
    assert_eq!(outcome.report.recommended_route, Route::ManualReview);
    assert_eq!(report_json(&outcome)["extractedFields"], serde_json::json!({}));
}

#[test]
fn test_empty_text_document_routes_to_manual_review() {
    let doc = write_temp(".txt", "");
    let outcome = pipeline().build_output(doc.path(), None).unwrap();

    assert_eq!(outcome.raw_text_length, 0);
    assert!(outcome.warnings.is_empty());
    assert_eq!(
        outcome.report.missing_fields,
        vec!["policy number", "incident date", "claimant name", "asset identifier"]
    );
    assert_eq!(outcome.report.recommended_route, Route::ManualReview);
    assert_eq!(report_json(&outcome)["extractedFields"], serde_json::json!({}));
}

#[test]
fn test_case_insensitive_validation() {
    let doc = write_temp(".txt", &COMPLETE_CLAIM.replace("ABC123", "abc123"));
    let expected = write_temp(".jsonl", r#"{"policyNumber":"ABC123","expectedRoute":"Fast-track"}"#);
    let outcome = pipeline()
        .build_output(doc.path(), Some(expected.path()))
        .unwrap();

    let validation = outcome.report.validation.as_ref().unwrap();
    assert!(validation.inconsistent.is_empty());
    assert!(validation.missing.is_empty());
    assert_eq!(validation.route_matches, Some(true));
    assert_eq!(outcome.report.recommended_route, Route::FastTrack);
}

#[test]
fn test_inconsistent_validation_flags_investigation() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let expected = write_temp(".jsonl", r#"{"claimantName":"John Roe","thirdParties":"None"}"#);
    let outcome = pipeline()
        .build_output(doc.path(), Some(expected.path()))
        .unwrap();

    let json = report_json(&outcome);
    assert_eq!(json["validation"]["inconsistent"], serde_json::json!(["claimantName"]));
    assert_eq!(json["validation"]["missing"], serde_json::json!(["thirdParties"]));
    assert!(json["validation"].get("routeMatches").is_none());
    assert_eq!(outcome.report.recommended_route, Route::InvestigationFlag);
}

#[test]
fn test_malformed_expected_file_degrades() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let expected = write_temp(".jsonl", "not json at all\n");
    let outcome = pipeline()
        .build_output(doc.path(), Some(expected.path()))
        .unwrap();

    assert!(outcome.report.validation.is_none());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].starts_with("Validation skipped"));
    assert!(report_json(&outcome).get("validation").is_none());
}

#[test]
fn test_required_validation_is_fatal() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let expected = write_temp(".jsonl", "");
    let err = pipeline()
        .require_validation(true)
        .build_output(doc.path(), Some(expected.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Validation(ValidationError::EmptyExpected { .. })
    ));
}

#[test]
fn test_unreadable_document_is_fatal() {
    let err = pipeline()
        .build_output("/nonexistent/fnol.pdf", None)
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Extraction(ExtractorError::DocumentRead { .. })
    ));
}

#[test]
fn test_llm_reasoning_included() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let provider = MockProvider::new("  The claim is complete and low risk.  ");
    let outcome = pipeline()
        .with_reasoning_provider(Box::new(provider.clone()))
        .build_output(doc.path(), None)
        .unwrap();

    assert_eq!(
        outcome.report.llm_reasoning.as_deref(),
        Some("The claim is complete and low risk.")
    );
    assert_eq!(provider.call_count(), 1);
    assert_eq!(
        report_json(&outcome)["llmReasoning"],
        "The claim is complete and low risk."
    );
}

#[test]
fn test_llm_failure_is_non_fatal() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let outcome = pipeline()
        .with_reasoning_provider(Box::new(MockProvider::failing()))
        .build_output(doc.path(), None)
        .unwrap();

    assert!(outcome.report.llm_reasoning.is_none());
    assert!(report_json(&outcome).get("llmReasoning").is_none());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].starts_with("LLM reasoning unavailable"));
    assert_eq!(outcome.report.recommended_route, Route::FastTrack);
}

#[test]
fn test_empty_llm_response_is_discarded() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let outcome = pipeline()
        .with_reasoning_provider(Box::new(MockProvider::new("   ")))
        .build_output(doc.path(), None)
        .unwrap();
    assert!(outcome.report.llm_reasoning.is_none());
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn test_no_provider_means_no_llm_reasoning() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let outcome = pipeline().build_output(doc.path(), None).unwrap();
    assert!(outcome.report.llm_reasoning.is_none());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_custom_mandatory_fields() {
    let mut config = FnolConfig::default();
    config.router.mandatory_fields = vec!["policyNumber".to_string(), "lossLocation".to_string()];
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let outcome = Pipeline::new(&config)
        .unwrap()
        .build_output(doc.path(), None)
        .unwrap();

    assert_eq!(outcome.report.missing_fields, vec![FieldName::LossLocation.display_name()]);
    assert_eq!(outcome.report.recommended_route, Route::ManualReview);
}

#[test]
fn test_missing_api_key_leaves_reasoning_off_silently() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let pipeline = pipeline().with_reasoning_from_lookup(&LlmConfig::default(), |_| None);
    assert!(!pipeline.has_reasoning());

    let outcome = pipeline.build_output(doc.path(), None).unwrap();
    assert!(outcome.warnings.is_empty());
    assert!(outcome.report.llm_reasoning.is_none());
    assert!(report_json(&outcome).get("llmReasoning").is_none());
    assert_eq!(outcome.report.recommended_route, Route::FastTrack);
}

#[test]
fn test_blank_api_key_leaves_reasoning_off_silently() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let outcome = pipeline()
        .with_reasoning_from_lookup(&LlmConfig::default(), |name| {
            (name == API_KEY_VAR).then(|| "   ".to_string())
        })
        .build_output(doc.path(), None)
        .unwrap();

    assert!(outcome.warnings.is_empty());
    assert!(outcome.report.llm_reasoning.is_none());
}

#[test]
fn test_api_key_enables_reasoning() {
    let pipeline = pipeline().with_reasoning_from_lookup(&LlmConfig::default(), |name| {
        (name == API_KEY_VAR).then(|| "gsk_test".to_string())
    });
    assert!(pipeline.has_reasoning());
}

#[test]
fn test_disabled_llm_ignores_credentials() {
    let config = LlmConfig {
        enabled: false,
        ..LlmConfig::default()
    };
    let pipeline = pipeline().with_reasoning_from_lookup(&config, |name| {
        (name == API_KEY_VAR).then(|| "gsk_test".to_string())
    });
    assert!(!pipeline.has_reasoning());
}

#[test]
fn test_bad_llm_settings_warn_on_every_outcome() {
    let doc = write_temp(".txt", COMPLETE_CLAIM);
    let pipeline = pipeline().with_reasoning_from_lookup(&LlmConfig::default(), |name| match name {
        API_KEY_VAR => Some("gsk_test".to_string()),
        TIMEOUT_VAR => Some("soon".to_string()),
        _ => None,
    });
    assert!(!pipeline.has_reasoning());

    let outcome = pipeline.build_output(doc.path(), None).unwrap();
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].starts_with("LLM reasoning unavailable"));
    assert!(outcome.report.llm_reasoning.is_none());
}
