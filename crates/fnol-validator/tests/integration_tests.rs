//! Integration tests for the Validator

use fnol_domain::{ExtractedFields, FieldName, Route};
use fnol_validator::{RecordSelection, ValidationError, Validator, ValidatorConfig};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn expected_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn extracted(pairs: &[(FieldName, &str)]) -> ExtractedFields {
    pairs.iter().map(|(f, v)| (*f, *v)).collect()
}

#[test]
fn test_validate_single_record_file() {
    let file = expected_file(
        r#"{"policyNumber":"ABC123","incidentDate":"2024-01-05","claimantName":"Jane Doe"}"#,
    );
    let fields = extracted(&[
        (FieldName::PolicyNumber, "abc123"),
        (FieldName::IncidentDate, "2024-01-05"),
        (FieldName::AssetId, "1HGCM82633A004352"),
    ]);

    let result = Validator::default_config()
        .validate(&fields, file.path(), "claim.txt")
        .unwrap();
    assert_eq!(result.missing, vec![FieldName::ClaimantName]);
    assert!(result.inconsistent.is_empty());
    assert_eq!(result.expected_route, None);
}

#[test]
fn test_validate_selects_record_by_file() {
    let file = expected_file(concat!(
        r#"{"file":"first.pdf","policyNumber":"P-1","expectedRoute":"Fast-track"}"#,
        "\n",
        r#"{"file":"second.pdf","policyNumber":"P-2","expectedRoute":"Investigation Flag"}"#,
        "\n",
    ));
    let fields = extracted(&[(FieldName::PolicyNumber, "P-2")]);

    let result = Validator::default_config()
        .validate(&fields, file.path(), "/data/inbox/second.pdf")
        .unwrap();
    assert!(result.is_clean());
    assert_eq!(result.expected_route, Some(Route::InvestigationFlag));
}

#[test]
fn test_validate_first_selection() {
    let file = expected_file(concat!(
        r#"{"file":"first.pdf","policyNumber":"P-1"}"#,
        "\n",
        r#"{"file":"second.pdf","policyNumber":"P-2"}"#,
        "\n",
    ));
    let validator = Validator::new(ValidatorConfig {
        selection: RecordSelection::First,
        ..ValidatorConfig::default()
    })
    .unwrap();
    let fields = extracted(&[(FieldName::PolicyNumber, "P-2")]);

    let result = validator.validate(&fields, file.path(), "second.pdf").unwrap();
    assert_eq!(result.inconsistent, vec![FieldName::PolicyNumber]);
}

#[test]
fn test_first_selection_ignores_malformed_later_lines() {
    let file = expected_file("{\"policyNumber\":\"ABC123\"}\nnot json\n");
    let first = Validator::new(ValidatorConfig {
        selection: RecordSelection::First,
        ..ValidatorConfig::default()
    })
    .unwrap();
    let fields = extracted(&[(FieldName::PolicyNumber, "abc123")]);

    let result = first.validate(&fields, file.path(), "claim.txt").unwrap();
    assert!(result.is_clean());

    let err = Validator::default_config()
        .validate(&fields, file.path(), "claim.txt")
        .unwrap_err();
    assert!(matches!(err, ValidationError::ExpectedFormat { line: 2, .. }));
}

#[test]
fn test_unreadable_file_is_io_error() {
    let err = Validator::default_config()
        .validate(&ExtractedFields::new(), "/nonexistent/expected.jsonl", "claim.txt")
        .unwrap_err();
    assert!(matches!(err, ValidationError::Io { .. }));
    assert!(!err.is_format_error());
}

#[test]
fn test_empty_file_is_format_error() {
    let file = expected_file("\n  \n");
    let err = Validator::default_config()
        .validate(&ExtractedFields::new(), file.path(), "claim.txt")
        .unwrap_err();
    assert!(matches!(err, ValidationError::EmptyExpected { .. }));
    assert!(err.is_format_error());
}

#[test]
fn test_malformed_line_is_format_error() {
    let file = expected_file("{\"policyNumber\":\"A\"}\npolicyNumber=A\n");
    let err = Validator::default_config()
        .validate(&ExtractedFields::new(), file.path(), "claim.txt")
        .unwrap_err();
    assert!(matches!(err, ValidationError::ExpectedFormat { line: 2, .. }));
}

fn field_strategy() -> impl Strategy<Value = FieldName> {
    (0..FieldName::ALL.len()).prop_map(|i| FieldName::ALL[i])
}

fn field_map_strategy() -> impl Strategy<Value = ExtractedFields> {
    prop::collection::vec((field_strategy(), "[A-Za-z0-9 ]{1,12}"), 0..10)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn test_validation_is_directional(
        extracted in field_map_strategy(),
        expected in field_map_strategy(),
    ) {
        let result = fnol_domain::ValidationResult::compare(&extracted, &expected);

        for field in result.missing.iter().chain(result.inconsistent.iter()) {
            prop_assert!(expected.contains(*field));
        }
        for field in &result.missing {
            prop_assert!(!extracted.contains(*field));
        }
        let mut sorted = result.missing.clone();
        sorted.sort();
        prop_assert_eq!(sorted, result.missing.clone());
    }

    #[test]
    fn test_self_validation_is_clean(fields in field_map_strategy()) {
        let result = fnol_domain::ValidationResult::compare(&fields, &fields);
        prop_assert!(result.is_clean());
    }
}
