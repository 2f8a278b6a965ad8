//! Integration tests for the Router

use fnol_domain::{ExtractedFields, FieldName, Route, ValidationResult};
use fnol_router::{rules::RULES, Router, RouterConfig, DEFAULT_MANDATORY};
use proptest::prelude::*;

fn fields(pairs: &[(FieldName, &str)]) -> ExtractedFields {
    pairs.iter().map(|(f, v)| (*f, *v)).collect()
}

fn mandatory_present() -> Vec<(FieldName, &'static str)> {
    vec![
        (FieldName::PolicyNumber, "ABC123"),
        (FieldName::IncidentDate, "2024-01-05"),
        (FieldName::ClaimantName, "Jane Doe"),
        (FieldName::AssetId, "1HGCM82633A004352"),
    ]
}

#[test]
fn test_no_recoverable_fields_goes_to_manual_review() {
    let router = Router::default_config();
    let empty = ExtractedFields::new();

    assert_eq!(router.find_missing(&empty), DEFAULT_MANDATORY.to_vec());
    let decision = router.route(&empty);
    assert_eq!(decision.route, Route::ManualReview);
    assert_eq!(
        decision.reasoning,
        "missing mandatory field(s): policy number, incident date, claimant name, asset identifier"
    );
}

#[test]
fn test_missing_claimant_scenario() {
    let router = Router::default_config();
    let extracted = fields(&[
        (FieldName::PolicyNumber, "ABC123"),
        (FieldName::IncidentDate, "2024-01-05"),
        (FieldName::AssetId, "1HGCM82633A004352"),
    ]);

    assert_eq!(router.find_missing(&extracted), vec![FieldName::ClaimantName]);
    assert_eq!(router.route(&extracted).route, Route::ManualReview);
}

#[test]
fn test_fraud_keyword_scenario() {
    let mut pairs = mandatory_present();
    pairs.push((
        FieldName::IncidentDescription,
        "Neighbour reports the collision was fraud",
    ));
    let decision = Router::default_config().route(&fields(&pairs));

    assert_eq!(decision.route, Route::InvestigationFlag);
    assert_eq!(decision.rule, "suspected-fraud");
    assert!(decision.reasoning.contains("fraud"));
}

#[test]
fn test_fraud_outranks_specialist() {
    let mut pairs = mandatory_present();
    pairs.push((FieldName::IncidentDescription, "Staged crash with whiplash injury"));
    let decision = Router::default_config().route(&fields(&pairs));
    assert_eq!(decision.route, Route::InvestigationFlag);
}

#[test]
fn test_injury_claim_goes_to_specialist() {
    let mut pairs = mandatory_present();
    pairs.push((FieldName::ClaimType, "Bodily Injury"));
    pairs.push((FieldName::InitialEstimate, "1,000"));
    let decision = Router::default_config().route(&fields(&pairs));

    assert_eq!(decision.route, Route::SpecialistQueue);
    assert_eq!(decision.rule, "specialist-loss");
}

#[test]
fn test_negated_injury_stays_fast_track() {
    let mut pairs = mandatory_present();
    pairs.push((
        FieldName::IncidentDescription,
        "Minor fender bender in parking lot, no injuries reported",
    ));
    let decision = Router::default_config().route(&fields(&pairs));

    assert_eq!(decision.route, Route::FastTrack);
    assert_eq!(decision.rule, "default");
}

#[test]
fn test_high_estimate_goes_to_manual_review() {
    let mut pairs = mandatory_present();
    pairs.push((FieldName::InitialEstimate, "USD 30,500.00"));
    let decision = Router::default_config().route(&fields(&pairs));

    assert_eq!(decision.route, Route::ManualReview);
    assert_eq!(decision.rule, "estimate-over-threshold");
    assert!(decision.reasoning.contains("30500.00"));
}

#[test]
fn test_clean_validation_does_not_change_route() {
    let extracted = fields(&mandatory_present());
    let clean = ValidationResult::default();
    let router = Router::default_config();
    assert_eq!(
        router.route_with_validation(&extracted, Some(&clean)),
        router.route(&extracted)
    );
}

#[test]
fn test_threshold_from_config() {
    let router = Router::new(RouterConfig {
        fast_track_threshold: 1_000.0,
        ..RouterConfig::default()
    })
    .unwrap();
    let mut pairs = mandatory_present();
    pairs.push((FieldName::InitialEstimate, "$1,500"));
    assert_eq!(router.route(&fields(&pairs)).route, Route::ManualReview);
}

fn field_strategy() -> impl Strategy<Value = FieldName> {
    (0..FieldName::ALL.len()).prop_map(|i| FieldName::ALL[i])
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 ]{0,16}",
        Just("fraud".to_string()),
        Just("bodily injury".to_string()),
        Just("heavy equipment".to_string()),
        Just("$30,000".to_string()),
        Just("450".to_string()),
    ]
}

fn field_map_strategy() -> impl Strategy<Value = ExtractedFields> {
    prop::collection::vec((field_strategy(), value_strategy()), 0..15)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn test_routing_is_deterministic(extracted in field_map_strategy()) {
        let router = Router::default_config();
        prop_assert_eq!(router.route(&extracted), router.route(&extracted));
    }

    #[test]
    fn test_routing_is_total_and_explained(extracted in field_map_strategy()) {
        let decision = Router::default_config().route(&extracted);
        prop_assert!(Route::ALL.contains(&decision.route));
        prop_assert!(!decision.reasoning.trim().is_empty());
        prop_assert!(!decision.reasoning.contains('\n'));
        prop_assert!(
            RULES.iter().any(|r| r.name == decision.rule) || decision.rule == "default"
        );
    }

    #[test]
    fn test_missing_mandatory_always_manual_review(extracted in field_map_strategy()) {
        let router = Router::default_config();
        let decision = router.route(&extracted);
        if !router.find_missing(&extracted).is_empty() {
            prop_assert_eq!(decision.route, Route::ManualReview);
            prop_assert_eq!(decision.rule, "missing-mandatory");
        }
    }

    #[test]
    fn test_blank_values_never_stored(field in field_strategy(), blank in "[ \t]{0,6}") {
        let mut map = ExtractedFields::new();
        prop_assert!(!map.insert(field, &blank));
        prop_assert!(map.is_empty());
    }
}
