//! Routing rule configuration

use fnol_domain::FieldName;
use serde::{Deserialize, Serialize};

/// Fields a claim cannot be processed without
pub const DEFAULT_MANDATORY: [FieldName; 4] = [
    FieldName::PolicyNumber,
    FieldName::IncidentDate,
    FieldName::ClaimantName,
    FieldName::AssetId,
];

/// Configuration for the Router
///
/// Keyword lists are matched case-insensitively as substrings, so `fraud`
/// also matches "fraudulent". Injury and total-loss keywords are ignored
/// when negated in the same clause ("no injuries reported").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Mandatory fields, by JSON key or display name
    pub mandatory_fields: Vec<String>,

    /// Estimates below this amount are fast-tracked
    pub fast_track_threshold: f64,

    /// Words in the incident description that flag a claim for investigation
    pub fraud_keywords: Vec<String>,

    /// Words in the claim type or description that indicate bodily injury
    pub injury_keywords: Vec<String>,

    /// Words in the claim type or description that indicate a total loss
    pub total_loss_keywords: Vec<String>,

    /// Asset types handled by specialist adjusters
    pub specialized_asset_types: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mandatory_fields: DEFAULT_MANDATORY.iter().map(|f| f.key().to_string()).collect(),
            fast_track_threshold: 25_000.0,
            fraud_keywords: strings(&["fraud", "staged", "intentional", "suspicious", "inconsistent"]),
            injury_keywords: strings(&["injury", "injured", "injuries", "bodily", "whiplash"]),
            total_loss_keywords: strings(&["total loss", "totaled", "totalled", "written off", "write-off"]),
            specialized_asset_types: strings(&[
                "heavy equipment",
                "machinery",
                "aircraft",
                "watercraft",
                "boat",
                "commercial truck",
                "tractor",
                "crane",
            ]),
        }
    }
}

impl RouterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.fast_track_threshold.is_finite() || self.fast_track_threshold <= 0.0 {
            return Err("fast_track_threshold must be a positive number".to_string());
        }
        for name in &self.mandatory_fields {
            if FieldName::parse(name).is_none() {
                return Err(format!("Unknown mandatory field: {}", name));
            }
        }
        let lists = [
            ("fraud_keywords", &self.fraud_keywords),
            ("injury_keywords", &self.injury_keywords),
            ("total_loss_keywords", &self.total_loss_keywords),
            ("specialized_asset_types", &self.specialized_asset_types),
        ];
        for (name, list) in lists {
            if list.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("{} must not contain blank entries", name));
            }
        }
        Ok(())
    }

    /// Resolve the mandatory field names, in canonical order
    pub fn resolve_mandatory(&self) -> Result<Vec<FieldName>, String> {
        let mut fields = self
            .mandatory_fields
            .iter()
            .map(|name| FieldName::parse(name).ok_or_else(|| format!("Unknown mandatory field: {}", name)))
            .collect::<Result<Vec<_>, _>>()?;
        fields.sort();
        fields.dedup();
        Ok(fields)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
