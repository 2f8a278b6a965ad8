//! Source documents: plain text or PDF (text layer plus AcroForm fields)

use crate::error::ExtractorError;
use lopdf::{Dictionary, Object};
use std::path::Path;
use tracing::{debug, warn};

/// Maximum nesting followed when walking AcroForm `/Kids`
const MAX_FORM_DEPTH: usize = 32;

/// Kind of source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF file
    Pdf,
    /// Anything else, read as text
    Text,
}

impl DocumentKind {
    /// Detect the kind from file content, falling back to the extension
    pub fn detect(path: &Path, bytes: &[u8]) -> Self {
        let trimmed = bytes
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .map(|start| &bytes[start..])
            .unwrap_or(bytes);
        if trimmed.starts_with(b"%PDF-") {
            return DocumentKind::Pdf;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::Text,
        }
    }
}

/// A named form widget value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Fully-qualified widget name (`parent.child`)
    pub name: String,
    /// Widget value, if any
    pub value: Option<String>,
}

/// A loaded document ready for extraction
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    kind: DocumentKind,
    text: String,
    form_fields: Vec<FormField>,
}

impl Document {
    /// Build a document from plain text
    pub fn from_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: DocumentKind::Text,
            text: text.into(),
            form_fields: Vec::new(),
        }
    }

    /// Parse a PDF held in memory
    pub fn from_pdf_bytes(source: impl Into<String>, bytes: &[u8]) -> Result<Self, ExtractorError> {
        let source = source.into();
        let pdf = lopdf::Document::load_mem(bytes).map_err(|e| {
            ExtractorError::document_read(&source, format!("failed to parse PDF: {}", e))
        })?;

        let text = pdf_text(&pdf);
        let form_fields = read_form_fields(&pdf);
        debug!(
            source = %source,
            pages = pdf.get_pages().len(),
            text_len = text.len(),
            form_fields = form_fields.len(),
            "Parsed PDF"
        );

        Ok(Self {
            source,
            kind: DocumentKind::Pdf,
            text,
            form_fields,
        })
    }

    /// Build a document from raw file content, detecting its kind
    ///
    /// An empty text file is a valid document with no recoverable fields.
    /// An empty PDF is not.
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self, ExtractorError> {
        let source = path.display().to_string();
        match DocumentKind::detect(path, bytes) {
            DocumentKind::Pdf if bytes.iter().all(|b| b.is_ascii_whitespace()) => {
                Err(ExtractorError::document_read(source, "PDF is empty"))
            }
            DocumentKind::Pdf => Self::from_pdf_bytes(source, bytes),
            DocumentKind::Text => Ok(Self::from_text(
                source,
                String::from_utf8_lossy(bytes).into_owned(),
            )),
        }
    }

    /// Read a document from disk, refusing files above `max_bytes`
    pub fn load(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let metadata = std::fs::metadata(path)
            .map_err(|e| ExtractorError::document_read(&source, e.to_string()))?;
        if !metadata.is_file() {
            return Err(ExtractorError::document_read(source, "not a regular file"));
        }
        if metadata.len() > max_bytes {
            return Err(ExtractorError::DocumentTooLarge {
                path: source,
                size: metadata.len(),
                max: max_bytes,
            });
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ExtractorError::document_read(&source, e.to_string()))?;
        Self::from_bytes(path, &bytes)
    }

    /// Path or identifier the document was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Kind of document
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Raw text content (PDF pages joined by newlines)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// AcroForm fields, in document order (empty for text documents)
    pub fn form_fields(&self) -> &[FormField] {
        &self.form_fields
    }
}

/// Extract text page by page, skipping pages lopdf cannot decode
fn pdf_text(pdf: &lopdf::Document) -> String {
    let mut parts = Vec::new();
    for page_number in pdf.get_pages().keys() {
        match pdf.extract_text(&[*page_number]) {
            Ok(text) => parts.push(text),
            Err(e) => warn!(page = page_number, error = %e, "Skipping page whose text could not be extracted"),
        }
    }
    parts.join("\n")
}

fn resolve<'a>(pdf: &'a lopdf::Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => pdf.get_object(*id).unwrap_or(object),
        other => other,
    }
}

fn read_form_fields(pdf: &lopdf::Document) -> Vec<FormField> {
    let mut out = Vec::new();
    let Some(fields) = acroform_fields(pdf) else {
        return out;
    };
    for field in fields {
        collect_field(pdf, field, None, None, 0, &mut out);
    }
    out
}

fn acroform_fields(pdf: &lopdf::Document) -> Option<&Vec<Object>> {
    let root = pdf.trailer.get(b"Root").ok()?;
    let catalog = resolve(pdf, root).as_dict().ok()?;
    let acroform = resolve(pdf, catalog.get(b"AcroForm").ok()?).as_dict().ok()?;
    resolve(pdf, acroform.get(b"Fields").ok()?).as_array().ok()
}

fn collect_field(
    pdf: &lopdf::Document,
    object: &Object,
    parent_name: Option<&str>,
    inherited_value: Option<&str>,
    depth: usize,
    out: &mut Vec<FormField>,
) {
    if depth > MAX_FORM_DEPTH {
        return;
    }
    let Ok(dict) = resolve(pdf, object).as_dict() else {
        return;
    };

    let partial = dict
        .get(b"T")
        .ok()
        .and_then(|t| pdf_string(resolve(pdf, t)));
    let name = match (parent_name, partial) {
        (Some(parent), Some(partial)) => Some(format!("{}.{}", parent, partial)),
        (None, Some(partial)) => Some(partial),
        (parent, None) => parent.map(str::to_string),
    };
    let value = dict
        .get(b"V")
        .ok()
        .and_then(|v| field_value(resolve(pdf, v)))
        .or_else(|| inherited_value.map(str::to_string));

    if let Some(kids) = named_kids(pdf, dict) {
        for kid in kids {
            collect_field(pdf, kid, name.as_deref(), value.as_deref(), depth + 1, out);
        }
    } else if let Some(name) = name {
        out.push(FormField { name, value });
    }
}

/// `/Kids` that are themselves fields (have a `/T`), not just widget annotations
fn named_kids<'a>(pdf: &'a lopdf::Document, dict: &'a Dictionary) -> Option<&'a Vec<Object>> {
    let kids = resolve(pdf, dict.get(b"Kids").ok()?).as_array().ok()?;
    let any_named = kids.iter().any(|kid| {
        resolve(pdf, kid)
            .as_dict()
            .map(|d| d.has(b"T"))
            .unwrap_or(false)
    });
    any_named.then_some(kids)
}

fn field_value(object: &Object) -> Option<String> {
    match object {
        // Unchecked checkboxes and radio groups
        Object::Name(name) if name.as_slice() == b"Off" => None,
        other => pdf_string(other),
    }
}

fn pdf_string(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, UTF-8 with BOM, else Latin-1
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }
    bytes.iter().map(|&b| b as char).collect()
}
