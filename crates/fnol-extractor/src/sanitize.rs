//! Placeholder detection for captured values
//!
//! Blank FNOL templates are full of prompts ("MM/DD/YYYY", "Page 1 of 3",
//! "ACORD 2 (2016/10)"). Anything that looks like template text is treated as
//! "not filled in" so that it is reported as absent rather than extracted.

use regex::Regex;
use std::sync::LazyLock;

/// Exact values that mean "no answer"
const EMPTY_ANSWERS: &[&str] = &["n/a", "na", "none", "-", "--", "nil"];

/// Fragments that only appear in template boilerplate
const TEMPLATE_FRAGMENTS: &[&str] = &["(mm/dd/yyyy)", "mm/dd/yyyy", "dd/mm/yyyy", "hh:mm", "acord"];

/// Question words that give away a form prompt when paired with a colon
const PROMPT_WORDS: &[&str] = &["where", "when", "describe", "estimate", "phone", "owner"];

static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpage\s+\d+").expect("valid regex"));

static FILL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s_.\-]*$").expect("valid regex"));

/// Decides whether a captured value is a real answer
#[derive(Debug, Clone)]
pub struct Sanitizer {
    max_value_length: usize,
    extra_placeholders: Vec<String>,
}

impl Sanitizer {
    /// Create a sanitizer
    pub fn new(max_value_length: usize, extra_placeholders: &[String]) -> Self {
        Self {
            max_value_length,
            extra_placeholders: extra_placeholders
                .iter()
                .map(|p| p.trim().to_lowercase())
                .collect(),
        }
    }

    /// Clean a value captured from running text
    ///
    /// Returns `None` when the value is blank or template text.
    pub fn clean_text_value(&self, raw: &str) -> Option<String> {
        let value = raw
            .trim()
            .trim_end_matches([',', ';', '|'])
            .trim();
        if value.is_empty() || FILL_LINE.is_match(value) {
            return None;
        }
        if value.chars().count() > self.max_value_length {
            return None;
        }

        let lowered = value.to_lowercase();
        if EMPTY_ANSWERS.contains(&lowered.as_str())
            || self.extra_placeholders.iter().any(|p| *p == lowered)
        {
            return None;
        }
        if TEMPLATE_FRAGMENTS.iter().any(|f| lowered.contains(f)) || PAGE_MARKER.is_match(value) {
            return None;
        }
        Some(value.to_string())
    }

    /// Clean a value read from a form widget
    ///
    /// Applies the text rules plus checks for prompt text and headings that
    /// blank templates often carry as default widget values.
    pub fn clean_form_value(&self, raw: &str) -> Option<String> {
        let value = self.clean_text_value(raw)?;
        let lowered = value.to_lowercase();

        if value.contains(':') && PROMPT_WORDS.iter().any(|w| lowered.contains(w)) {
            return None;
        }
        if value.chars().count() > 20 && uppercase_fraction(&value) > 0.6 {
            return None;
        }
        Some(value)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(200, &[])
    }
}

fn uppercase_fraction(value: &str) -> f64 {
    let letters: Vec<char> = value.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return 0.0;
    }
    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    upper as f64 / letters.len() as f64
}
