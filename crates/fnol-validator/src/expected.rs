//! Expected records loaded from JSON Lines files

use crate::config::RecordSelection;
use crate::error::ValidationError;
use fnol_domain::{ExpectedFields, FieldName, Route};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Key naming the document a record belongs to
const DOCUMENT_KEY: &str = "file";

/// Key naming the route the record's author expects
const ROUTE_KEY: &str = "expectedRoute";

/// One line of an expected file
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedRecord {
    /// 1-based line number in the source file
    pub line: usize,

    /// Document identifier (`file`), if the record names one
    pub document: Option<String>,

    /// Route the record expects (`expectedRoute`), if recognized
    pub expected_route: Option<Route>,

    /// Expected field values; `null` entries are not stored
    pub fields: ExpectedFields,
}

impl ExpectedRecord {
    /// Parse one JSON object line
    pub fn from_json_line(line: usize, text: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(text).map_err(|e| ValidationError::ExpectedFormat {
            line,
            reason: e.to_string(),
        })?;
        let Value::Object(object) = value else {
            return Err(ValidationError::ExpectedFormat {
                line,
                reason: "expected a JSON object".to_string(),
            });
        };
        Self::from_object(line, object)
    }

    fn from_object(line: usize, object: Map<String, Value>) -> Result<Self, ValidationError> {
        let mut record = ExpectedRecord {
            line,
            document: None,
            expected_route: None,
            fields: ExpectedFields::new(),
        };

        for (key, value) in object {
            match key.as_str() {
                DOCUMENT_KEY => {
                    record.document = match value {
                        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                        Value::String(_) | Value::Null => None,
                        other => {
                            return Err(ValidationError::ExpectedFormat {
                                line,
                                reason: format!("'{}' must be a string, got {}", DOCUMENT_KEY, other),
                            })
                        }
                    };
                }
                ROUTE_KEY => {
                    record.expected_route = match value.as_str() {
                        Some(s) => {
                            let route = Route::parse(s);
                            if route.is_none() {
                                warn!(line, route = s, "Ignoring unrecognized expected route");
                            }
                            route
                        }
                        None => None,
                    };
                }
                _ => match FieldName::parse(&key) {
                    Some(field) => {
                        if let Some(text) = value_text(&value) {
                            record.fields.insert(field, text);
                        }
                    }
                    None => debug!(line, key = %key, "Ignoring unknown expected key"),
                },
            }
        }

        Ok(record)
    }

    /// Whether this record names the given document
    ///
    /// Matches on the full path as given, or on the file name alone.
    pub fn matches_document(&self, document: &Path) -> bool {
        let Some(named) = self.document.as_deref() else {
            return false;
        };
        if Path::new(named) == document {
            return true;
        }
        match (Path::new(named).file_name(), document.file_name()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Render a JSON value as the text an extractor would produce
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

fn read_expected(path: &Path) -> Result<String, ValidationError> {
    std::fs::read_to_string(path).map_err(|source| ValidationError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Every record of an expected file, in line order
#[derive(Debug, Clone)]
pub struct ExpectedRecordSet {
    records: Vec<ExpectedRecord>,
}

impl ExpectedRecordSet {
    /// Read and parse an expected file
    pub fn load(path: impl AsRef<Path>, max_records: usize) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        Self::parse(&read_expected(path)?, max_records)?.require_records(path)
    }

    /// Read an expected file, parsing only its first record
    pub fn load_first(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        Self::parse_first(&read_expected(path)?)?.require_records(path)
    }

    fn require_records(self, path: &Path) -> Result<Self, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyExpected {
                path: path.display().to_string(),
            });
        }
        debug!(path = %path.display(), records = self.len(), "Loaded expected records");
        Ok(self)
    }

    /// Parse JSON Lines content; blank lines are skipped
    pub fn parse(content: &str, max_records: usize) -> Result<Self, ValidationError> {
        let mut records = Vec::new();
        for (index, text) in content.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            if records.len() == max_records {
                return Err(ValidationError::ExpectedFormat {
                    line: index + 1,
                    reason: format!("more than {} records", max_records),
                });
            }
            records.push(ExpectedRecord::from_json_line(index + 1, text)?);
        }
        Ok(Self { records })
    }

    /// Parse the first non-blank line only; later lines are not examined
    pub fn parse_first(content: &str) -> Result<Self, ValidationError> {
        let first = content
            .lines()
            .enumerate()
            .find(|(_, text)| !text.trim().is_empty());
        let records = match first {
            Some((index, text)) => vec![ExpectedRecord::from_json_line(index + 1, text)?],
            None => Vec::new(),
        };
        Ok(Self { records })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records
    pub fn records(&self) -> &[ExpectedRecord] {
        &self.records
    }

    /// Pick the record to validate `document` against
    pub fn select(
        &self,
        selection: RecordSelection,
        document: &Path,
    ) -> Result<&ExpectedRecord, ValidationError> {
        let document_name = document.display().to_string();
        let first = self
            .records
            .first()
            .ok_or_else(|| ValidationError::EmptyExpected {
                path: document_name.clone(),
            })?;

        match selection {
            RecordSelection::First => Ok(first),
            RecordSelection::ByDocument => {
                if self.records.iter().all(|r| r.document.is_none()) {
                    return Ok(first);
                }
                self.records
                    .iter()
                    .find(|r| r.matches_document(document))
                    .ok_or(ValidationError::NoMatchingRecord {
                        document: document_name,
                    })
            }
        }
    }
}
