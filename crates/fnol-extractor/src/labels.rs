//! Static label table: canonical field → recognized label variants

use fnol_domain::FieldName;

/// Label variants recognized for one canonical field
#[derive(Debug)]
pub struct FieldLabels {
    /// Canonical field
    pub field: FieldName,
    /// Lowercase label variants, as they appear in documents
    pub labels: &'static [&'static str],
    /// Extra names only seen on form widgets
    pub widget_aliases: &'static [&'static str],
}

/// Every recognized label, in canonical field order
pub static LABEL_TABLE: &[FieldLabels] = &[
    FieldLabels {
        field: FieldName::PolicyNumber,
        labels: &["policy number", "policy no.", "policy no", "policy #", "policy id"],
        widget_aliases: &["policy num", "policynum", "policy"],
    },
    FieldLabels {
        field: FieldName::PolicyholderName,
        labels: &[
            "policyholder name",
            "policy holder name",
            "policyholder",
            "named insured",
            "insured name",
            "name of insured",
        ],
        widget_aliases: &["insured"],
    },
    FieldLabels {
        field: FieldName::EffectiveDates,
        labels: &["effective dates", "effective date", "policy period", "coverage period"],
        widget_aliases: &["effective"],
    },
    FieldLabels {
        field: FieldName::IncidentDate,
        labels: &[
            "date of loss",
            "date of incident",
            "incident date",
            "accident date",
            "loss date",
            "date",
        ],
        widget_aliases: &["dol", "loss dt"],
    },
    FieldLabels {
        field: FieldName::IncidentTime,
        labels: &["time of loss", "time of incident", "incident time", "time"],
        widget_aliases: &["loss time"],
    },
    FieldLabels {
        field: FieldName::LossLocation,
        labels: &["location of loss", "loss location", "incident location", "location"],
        widget_aliases: &["loss address", "address of loss"],
    },
    FieldLabels {
        field: FieldName::IncidentDescription,
        labels: &[
            "description of loss",
            "description of incident",
            "incident description",
            "loss description",
            "describe the loss",
            "description",
        ],
        widget_aliases: &["loss desc", "remarks"],
    },
    FieldLabels {
        field: FieldName::ClaimantName,
        labels: &["claimant name", "name of claimant", "claimant"],
        widget_aliases: &[],
    },
    FieldLabels {
        field: FieldName::ClaimantContact,
        labels: &[
            "contact details",
            "claimant contact",
            "contact information",
            "contact",
        ],
        widget_aliases: &["claimant phone", "claimant email", "phone"],
    },
    FieldLabels {
        field: FieldName::ThirdParties,
        labels: &["third parties", "third party", "other parties", "other party"],
        widget_aliases: &[],
    },
    FieldLabels {
        field: FieldName::AssetType,
        labels: &["asset type", "vehicle type", "type of vehicle", "equipment type"],
        widget_aliases: &[],
    },
    FieldLabels {
        field: FieldName::AssetId,
        labels: &[
            "asset id",
            "asset identifier",
            "vehicle identification number",
            "vin",
            "serial number",
        ],
        widget_aliases: &["vin number", "serial no"],
    },
    FieldLabels {
        field: FieldName::InitialEstimate,
        labels: &[
            "initial estimate",
            "estimated damage",
            "total estimated loss",
            "estimated loss",
            "damage estimate",
            "estimate",
        ],
        widget_aliases: &["estimated amount", "amount"],
    },
    FieldLabels {
        field: FieldName::ClaimType,
        labels: &["claim type", "type of loss", "loss type", "type of claim"],
        widget_aliases: &[],
    },
    FieldLabels {
        field: FieldName::Attachments,
        labels: &["attachments", "attachment"],
        widget_aliases: &[],
    },
];

/// Look up the labels for a field
pub fn labels_for(field: FieldName) -> Option<&'static FieldLabels> {
    LABEL_TABLE.iter().find(|entry| entry.field == field)
}

/// All `(label, field)` pairs, longest label first
///
/// Longest-first ordering makes "date of loss" win over "date" when both
/// would match at the same position.
pub fn labels_longest_first() -> Vec<(&'static str, FieldName)> {
    let mut pairs: Vec<(&'static str, FieldName)> = LABEL_TABLE
        .iter()
        .flat_map(|entry| entry.labels.iter().map(move |label| (*label, entry.field)))
        .collect();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    pairs
}

/// Resolve a matched label (any case) back to its field
pub fn field_for_label(label: &str) -> Option<FieldName> {
    let lowered = label.to_lowercase();
    LABEL_TABLE
        .iter()
        .find(|entry| entry.labels.iter().any(|l| *l == lowered))
        .map(|entry| entry.field)
}
