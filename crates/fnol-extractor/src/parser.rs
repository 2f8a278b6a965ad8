//! Label scanning over raw document text

use crate::error::ExtractorError;
use crate::labels::{field_for_label, labels_longest_first};
use crate::sanitize::Sanitizer;
use fnol_domain::ExtractedFields;
use regex::Regex;
use tracing::trace;

/// Finds `Label: value` pairs in plain text
///
/// Each line is matched against the label table. A value runs to the end of
/// the line, or stops where another recognized label followed by a colon
/// begins on the same line. Labels split across lines are not joined.
#[derive(Debug, Clone)]
pub struct LabelScanner {
    /// Label at the start of a segment, followed by a separator
    leading: Regex,
    /// Label followed by a colon somewhere inside a value
    inline: Regex,
}

impl LabelScanner {
    /// Compile the scanner
    ///
    /// With `allow_whitespace_separator`, `Policy Number ABC123` is accepted in
    /// addition to `Policy Number: ABC123` and `Policy Number - ABC123`.
    pub fn new(allow_whitespace_separator: bool) -> Result<Self, ExtractorError> {
        let alternation = labels_longest_first()
            .into_iter()
            .map(|(label, _)| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");

        let separator = if allow_whitespace_separator {
            r"(?:\s*[:\-–]\s*|\s+)"
        } else {
            r"\s*[:\-–]\s*"
        };

        let leading = Regex::new(&format!(r"(?i)^\s*(?P<label>{alternation}){separator}"))?;
        let inline = Regex::new(&format!(r"(?i)(?:^|[\s,;|])(?:{alternation})\s*:"))?;

        Ok(Self { leading, inline })
    }

    /// Scan text and collect the first value found for each field
    pub fn scan(&self, text: &str, sanitizer: &Sanitizer) -> ExtractedFields {
        let mut fields = ExtractedFields::new();
        for line in text.lines() {
            self.scan_line(line, sanitizer, &mut fields);
        }
        fields
    }

    fn scan_line(&self, line: &str, sanitizer: &Sanitizer, fields: &mut ExtractedFields) {
        let mut segment = line.trim();

        while let Some(captures) = self.leading.captures(segment) {
            let (Some(whole), Some(label)) = (captures.get(0), captures.name("label")) else {
                break;
            };
            let Some(field) = field_for_label(label.as_str()) else {
                break;
            };

            let rest = &segment[whole.end()..];
            let (raw_value, remainder) = match self.inline.find(rest) {
                Some(next) => (&rest[..next.start()], &rest[next.start()..]),
                None => (rest, ""),
            };

            if let Some(value) = sanitizer.clean_text_value(raw_value) {
                if fields.insert_first(field, &value) {
                    trace!(field = field.key(), value = %value, "Captured labeled value");
                }
            }

            let next_segment = remainder.trim_start_matches([' ', '\t', ',', ';', '|']);
            if next_segment.is_empty() || next_segment.len() == segment.len() {
                break;
            }
            segment = next_segment;
        }
    }
}
