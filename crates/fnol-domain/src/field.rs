//! Field module - canonical claim fields and the maps that hold their values

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Canonical FNOL field
///
/// The set is closed: labels in a document that do not map to one of these
/// variants are ignored. Variant order is the canonical order used for every
/// list and map the system emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    /// Policy number
    PolicyNumber,
    /// Name of the insured party
    PolicyholderName,
    /// Policy effective period
    EffectiveDates,
    /// Date the incident occurred
    IncidentDate,
    /// Time the incident occurred
    IncidentTime,
    /// Where the loss happened
    LossLocation,
    /// Free-text description of the incident
    IncidentDescription,
    /// Person making the claim
    ClaimantName,
    /// Phone or email for the claimant
    ClaimantContact,
    /// Other parties involved
    ThirdParties,
    /// Kind of asset involved (vehicle type, equipment class)
    AssetType,
    /// Asset identifier (VIN, serial number)
    AssetId,
    /// Claimed amount as written in the document
    InitialEstimate,
    /// Loss type (collision, theft, injury, ...)
    ClaimType,
    /// Attachments listed on the form
    Attachments,
}

impl FieldName {
    /// Every field in canonical order
    pub const ALL: [FieldName; 15] = [
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::EffectiveDates,
        FieldName::IncidentDate,
        FieldName::IncidentTime,
        FieldName::LossLocation,
        FieldName::IncidentDescription,
        FieldName::ClaimantName,
        FieldName::ClaimantContact,
        FieldName::ThirdParties,
        FieldName::AssetType,
        FieldName::AssetId,
        FieldName::InitialEstimate,
        FieldName::ClaimType,
        FieldName::Attachments,
    ];

    /// JSON key used in reports and expected records
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "policyNumber",
            FieldName::PolicyholderName => "policyholderName",
            FieldName::EffectiveDates => "effectiveDates",
            FieldName::IncidentDate => "incidentDate",
            FieldName::IncidentTime => "incidentTime",
            FieldName::LossLocation => "lossLocation",
            FieldName::IncidentDescription => "incidentDescription",
            FieldName::ClaimantName => "claimantName",
            FieldName::ClaimantContact => "claimantContact",
            FieldName::ThirdParties => "thirdParties",
            FieldName::AssetType => "assetType",
            FieldName::AssetId => "assetId",
            FieldName::InitialEstimate => "initialEstimate",
            FieldName::ClaimType => "claimType",
            FieldName::Attachments => "attachments",
        }
    }

    /// Human-readable name used in reasoning strings and `missingFields`
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "policy number",
            FieldName::PolicyholderName => "policyholder name",
            FieldName::EffectiveDates => "effective dates",
            FieldName::IncidentDate => "incident date",
            FieldName::IncidentTime => "incident time",
            FieldName::LossLocation => "loss location",
            FieldName::IncidentDescription => "incident description",
            FieldName::ClaimantName => "claimant name",
            FieldName::ClaimantContact => "claimant contact",
            FieldName::ThirdParties => "third parties",
            FieldName::AssetType => "asset type",
            FieldName::AssetId => "asset identifier",
            FieldName::InitialEstimate => "initial estimate",
            FieldName::ClaimType => "claim type",
            FieldName::Attachments => "attachments",
        }
    }

    /// Title-case label as it appears on the standard FNOL form
    pub fn form_label(&self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "Policy Number",
            FieldName::PolicyholderName => "Policyholder Name",
            FieldName::EffectiveDates => "Effective Dates",
            FieldName::IncidentDate => "Date",
            FieldName::IncidentTime => "Time",
            FieldName::LossLocation => "Location",
            FieldName::IncidentDescription => "Description",
            FieldName::ClaimantName => "Claimant",
            FieldName::ClaimantContact => "Contact Details",
            FieldName::ThirdParties => "Third Parties",
            FieldName::AssetType => "Asset Type",
            FieldName::AssetId => "Asset ID",
            FieldName::InitialEstimate => "Initial Estimate",
            FieldName::ClaimType => "Claim Type",
            FieldName::Attachments => "Attachments",
        }
    }

    /// Parse a field name from a JSON key, display name, snake_case name,
    /// or form label (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use fnol_domain::FieldName;
    ///
    /// assert_eq!(FieldName::parse("policyNumber"), Some(FieldName::PolicyNumber));
    /// assert_eq!(FieldName::parse("Policy Number"), Some(FieldName::PolicyNumber));
    /// assert_eq!(FieldName::parse("claimant_name"), Some(FieldName::ClaimantName));
    /// assert_eq!(FieldName::parse("Asset ID"), Some(FieldName::AssetId));
    /// assert_eq!(FieldName::parse("favouriteColour"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let folded = fold_name(s);
        if folded.is_empty() {
            return None;
        }
        FieldName::ALL.into_iter().find(|field| {
            fold_name(field.key()) == folded
                || fold_name(field.display_name()) == folded
                || fold_name(field.form_label()) == folded
        })
    }
}

/// Lowercase and drop everything that is not alphanumeric, so that
/// `policyNumber`, `policy_number` and `Policy Number` compare equal.
fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Values keyed by canonical field
///
/// A field that is not present in the map is absent. Blank values are never
/// stored, so `contains` is the single test for "was this field found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: BTreeMap<FieldName, String>,
}

/// Fields produced by the extractor for one document
pub type ExtractedFields = FieldMap;

/// Reference values loaded from one expected record
pub type ExpectedFields = FieldMap;

impl FieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, trimming it first
    ///
    /// Blank values are ignored. Returns `true` if the value was stored.
    pub fn insert(&mut self, field: FieldName, value: impl AsRef<str>) -> bool {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return false;
        }
        self.values.insert(field, trimmed.to_string());
        true
    }

    /// Insert only if the field is not already present (first match wins)
    pub fn insert_first(&mut self, field: FieldName, value: impl AsRef<str>) -> bool {
        if self.values.contains_key(&field) {
            return false;
        }
        self.insert(field, value)
    }

    /// Get the value for a field
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Whether the field was found
    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Number of present fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate present fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Present field names in canonical order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.values.keys().copied()
    }
}

impl<S: AsRef<str>> FromIterator<(FieldName, S)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a FieldName, &'a String);
    type IntoIter = btree_map::Iter<'a, FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Fold case and collapse internal whitespace
///
/// # Examples
///
/// ```
/// use fnol_domain::normalize_value;
///
/// assert_eq!(normalize_value("  ABC   123 "), "abc 123");
/// ```
pub fn normalize_value(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parse a monetary amount such as `$12,500.00` or `USD 900`
///
/// Returns `None` when the text is not a plain finite number once currency
/// markers and thousands separators are removed.
///
/// # Examples
///
/// ```
/// use fnol_domain::parse_amount;
///
/// assert_eq!(parse_amount("$12,500.50"), Some(12500.5));
/// assert_eq!(parse_amount("USD 900"), Some(900.0));
/// assert_eq!(parse_amount("about nine hundred"), None);
/// ```
pub fn parse_amount(value: &str) -> Option<f64> {
    let mut cleaned = value.trim().to_lowercase();
    for marker in ["usd", "$"] {
        cleaned = cleaned.replace(marker, "");
    }
    let cleaned: String = cleaned
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Compare two values of `field` the way validation does
///
/// Initial estimates compare numerically. Every other field, identifiers
/// included, compares after [`normalize_value`], so "00123" and "123" differ.
///
/// # Examples
///
/// ```
/// use fnol_domain::{values_equivalent, FieldName};
///
/// assert!(values_equivalent(FieldName::InitialEstimate, "$1,200", "1200.00"));
/// assert!(!values_equivalent(FieldName::PolicyNumber, "00123", "123"));
/// ```
pub fn values_equivalent(field: FieldName, left: &str, right: &str) -> bool {
    if field == FieldName::InitialEstimate {
        if let (Some(a), Some(b)) = (parse_amount(left), parse_amount(right)) {
            return (a - b).abs() < 0.005;
        }
    }
    normalize_value(left) == normalize_value(right)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: whitespace-only values never become present fields
        #[test]
        fn test_blank_values_never_stored(ws in "[ \t\n]{0,8}") {
            let mut map = FieldMap::new();
            map.insert(FieldName::AssetId, &ws);
            prop_assert!(!map.contains(FieldName::AssetId));
        }

        /// Property: normalization ignores case and whitespace layout
        #[test]
        fn test_normalization_case_insensitive(s in "[A-Za-z0-9]{1,12}( [A-Za-z0-9]{1,12}){0,3}") {
            let spaced = s.replace(' ', "   ");
            for field in FieldName::ALL {
                prop_assert!(values_equivalent(field, &s.to_uppercase(), &spaced.to_lowercase()));
            }
        }
    }
}
