//! Mapping PDF form widgets onto canonical fields

use crate::document::FormField;
use crate::labels::LABEL_TABLE;
use crate::sanitize::Sanitizer;
use fnol_domain::{ExtractedFields, FieldName};
use std::collections::BTreeMap;
use tracing::trace;

/// Normalize a widget name for lookup
///
/// `claim.DateOfLoss` becomes `claim date of loss`: camelCase is split,
/// anything that is not alphanumeric becomes a space, and the result is
/// lowercased with whitespace collapsed.
pub fn normalize_widget_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut spaced = String::with_capacity(name.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            spaced.push(' ');
            continue;
        }
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                spaced.push(' ');
            }
        }
        spaced.extend(c.to_lowercase());
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Last segment of a fully-qualified widget name, normalized
fn leaf_name(name: &str) -> String {
    normalize_widget_name(name.rsplit('.').next().unwrap_or(name))
}

fn exact_field(widget: &str) -> Option<FieldName> {
    let leaf = leaf_name(widget);
    let full = normalize_widget_name(widget);
    LABEL_TABLE
        .iter()
        .find(|entry| {
            entry
                .labels
                .iter()
                .chain(entry.widget_aliases.iter())
                .any(|label| *label == leaf || *label == full)
        })
        .map(|entry| entry.field)
}

fn significant_words(field: FieldName) -> Vec<String> {
    field
        .form_label()
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .map(str::to_lowercase)
        .collect()
}

/// Map form widgets to fields
///
/// Pass one matches widget names exactly against the label table. Pass two
/// gives fields still unmatched the first unclaimed widget whose name holds
/// every significant word of the field's form label. The first widget
/// matching a field wins, even when its value turns out to be a placeholder.
pub fn map_form_fields(form_fields: &[FormField], sanitizer: &Sanitizer) -> ExtractedFields {
    let mut assigned: BTreeMap<FieldName, usize> = BTreeMap::new();
    let mut claimed = vec![false; form_fields.len()];

    for (index, widget) in form_fields.iter().enumerate() {
        if let Some(field) = exact_field(&widget.name) {
            claimed[index] = true;
            assigned.entry(field).or_insert(index);
        }
    }

    for field in FieldName::ALL {
        if assigned.contains_key(&field) {
            continue;
        }
        let words = significant_words(field);
        if words.is_empty() {
            continue;
        }
        let found = form_fields.iter().enumerate().find(|(index, widget)| {
            if claimed[*index] {
                return false;
            }
            let normalized = normalize_widget_name(&widget.name);
            let tokens: Vec<&str> = normalized.split(' ').collect();
            words.iter().all(|word| tokens.contains(&word.as_str()))
        });
        if let Some((index, _)) = found {
            claimed[index] = true;
            assigned.insert(field, index);
        }
    }

    let mut fields = ExtractedFields::new();
    for (field, index) in assigned {
        let widget = &form_fields[index];
        let value = widget
            .value
            .as_deref()
            .and_then(|raw| sanitizer.clean_form_value(raw));
        match value {
            Some(value) => {
                trace!(field = field.key(), widget = %widget.name, "Mapped form widget");
                fields.insert(field, value);
            }
            None => trace!(field = field.key(), widget = %widget.name, "Form widget holds no answer"),
        }
    }
    fields
}
