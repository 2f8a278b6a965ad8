//! The JSON report emitted for each document

use fnol_domain::{ExtractedFields, FieldName, Route, RoutingDecision, ValidationResult};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Final output for one document
///
/// Built once, never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputReport {
    /// Extracted values keyed by JSON field key, canonical order
    #[serde(serialize_with = "serialize_fields")]
    pub extracted_fields: ExtractedFields,

    /// Display names of missing mandatory fields, canonical order
    pub missing_fields: Vec<String>,

    /// Selected route
    #[serde(serialize_with = "serialize_route")]
    pub recommended_route: Route,

    /// Rule-based justification
    pub reasoning: String,

    /// Comparison against the expected record, when one was validated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationReport>,

    /// LLM explanation, when one was obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_reasoning: Option<String>,
}

/// Validation block of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// JSON keys of expected fields the extraction did not find
    pub missing: Vec<String>,

    /// JSON keys of fields whose values disagree
    pub inconsistent: Vec<String>,

    /// Route named by the expected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_route: Option<String>,

    /// Whether the recommended route matches the expected one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_matches: Option<bool>,
}

fn serialize_fields<S: Serializer>(fields: &ExtractedFields, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (field, value) in fields.iter() {
        map.serialize_entry(field.key(), value)?;
    }
    map.end()
}

fn serialize_route<S: Serializer>(route: &Route, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(route.as_str())
}

fn keys(fields: &[FieldName]) -> Vec<String> {
    fields.iter().map(|f| f.key().to_string()).collect()
}

impl ValidationReport {
    /// Summarize a validation result against the route actually chosen
    pub fn new(result: &ValidationResult, actual: Route) -> Self {
        Self {
            missing: keys(&result.missing),
            inconsistent: keys(&result.inconsistent),
            expected_route: result.expected_route.map(|r| r.as_str().to_string()),
            route_matches: result.route_matches(actual),
        }
    }
}

impl OutputReport {
    /// Assemble a report
    pub fn new(
        extracted_fields: ExtractedFields,
        missing: &[FieldName],
        decision: RoutingDecision,
        validation: Option<&ValidationResult>,
        llm_reasoning: Option<String>,
    ) -> Self {
        let validation = validation.map(|v| ValidationReport::new(v, decision.route));
        Self {
            extracted_fields,
            missing_fields: missing.iter().map(|f| f.display_name().to_string()).collect(),
            recommended_route: decision.route,
            reasoning: decision.reasoning,
            validation,
            llm_reasoning,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision() -> RoutingDecision {
        RoutingDecision::new(
            Route::ManualReview,
            "missing mandatory field(s): claimant name",
            "missing-mandatory",
        )
    }

    #[test]
    fn test_report_json_shape() {
        let fields: ExtractedFields = [
            (FieldName::AssetId, "VIN1"),
            (FieldName::PolicyNumber, "ABC123"),
        ]
        .into_iter()
        .collect();
        let report = OutputReport::new(fields, &[FieldName::ClaimantName], decision(), None, None);
        let json = report.to_json_pretty().unwrap();

        let policy = json.find("\"policyNumber\"").unwrap();
        let asset = json.find("\"assetId\"").unwrap();
        assert!(policy < asset, "fields must be in canonical order");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommendedRoute"], "manual-review");
        assert_eq!(value["missingFields"][0], "claimant name");
        assert_eq!(value["extractedFields"]["policyNumber"], "ABC123");
        assert!(value.get("validation").is_none());
        assert!(value.get("llmReasoning").is_none());
    }

    #[test]
    fn test_validation_block() {
        let result = ValidationResult {
            missing: vec![FieldName::ClaimantName],
            inconsistent: vec![],
            expected_route: Some(Route::FastTrack),
        };
        let report = OutputReport::new(
            ExtractedFields::new(),
            &[],
            decision(),
            Some(&result),
            Some("Explained.".to_string()),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["validation"]["missing"][0], "claimantName");
        assert_eq!(value["validation"]["expectedRoute"], "fast-track");
        assert_eq!(value["validation"]["routeMatches"], false);
        assert_eq!(value["llmReasoning"], "Explained.");
    }

    #[test]
    fn test_route_match_omitted_without_expected_route() {
        let report = ValidationReport::new(&ValidationResult::default(), Route::FastTrack);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("expectedRoute").is_none());
        assert!(value.get("routeMatches").is_none());
        assert_eq!(value["missing"], serde_json::json!([]));
    }
}
