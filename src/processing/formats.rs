use std::fs;
use std::path::Path;

use async_trait::async_trait;
use docx_rs::read_docx;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// PDF files (.pdf)
    Pdf,
    /// Word documents (.docx, .doc)
    Word,
    /// Plain text files (.txt)
    PlainText,
}

/// Errors that can occur during format handling
#[derive(Error, Debug)]
pub enum FormatError {
    /// Error when file format is not supported
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Error when reading file
    #[error("File read error: {0}")]
    FileReadError(#[from] std::io::Error),

    /// Error during format-specific processing
    #[error("Processing error: {0}")]
    ProcessingError(String),

    /// Error when file extension is missing
    #[error("Missing file extension")]
    MissingExtension,
}

impl DocumentFormat {
    /// Resolve a caller-declared extension (".pdf", "PDF", "docx", ...) to a
    /// document format. Any extension outside the supported set is rejected.
    pub fn from_extension(extension: &str) -> Result<Self, FormatError> {
        let ext = extension.trim().trim_start_matches('.').to_lowercase();
        if ext.is_empty() {
            return Err(FormatError::MissingExtension);
        }
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Word),
            "txt" => Ok(DocumentFormat::PlainText),
            _ => Err(FormatError::UnsupportedFormat(ext)),
        }
    }
}

/// Trait for format-specific document handlers
#[async_trait]
pub trait FormatHandler: Send + Sync {
    /// Extract text content from a file
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError>;

    /// Get supported file extensions
    fn supported_extensions(&self) -> Vec<&'static str>;
}

/// Detect document format from a file path's extension
pub fn detect_format(file_path: &Path) -> Result<DocumentFormat, FormatError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(FormatError::MissingExtension)?;

    DocumentFormat::from_extension(extension)
}

/// Get appropriate format handler for document type
pub fn get_format_handler(format: DocumentFormat) -> Box<dyn FormatHandler> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfHandler),
        DocumentFormat::Word => Box::new(WordHandler),
        DocumentFormat::PlainText => Box::new(TextHandler),
    }
}

/// Extract text from a document at `path` with the caller-declared
/// `extension`.
///
/// Only an unsupported extension is an error. A handler failure (missing
/// backend, malformed file, unreadable bytes) is logged and degrades to empty
/// text; downstream field extraction treats empty text as a soft failure and
/// produces an all-defaults record.
pub async fn extract_text(path: &Path, extension: &str) -> Result<String, FormatError> {
    let format = DocumentFormat::from_extension(extension)?;
    let handler = get_format_handler(format);
    match handler.extract_text(path).await {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("text extraction failed for {}: {}", path.display(), e);
            Ok(String::new())
        }
    }
}

/// Handler for plain text files
pub struct TextHandler;

#[async_trait]
impl FormatHandler for TextHandler {
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError> {
        tokio::fs::read_to_string(file_path)
            .await
            .map_err(FormatError::FileReadError)
    }

    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["txt"]
    }
}

/// Handler for PDF files
///
/// Extraction runs through an ordered list of backends: the layout-aware
/// `pdf-extract` renderer first, then a plain `lopdf` page walk. The first
/// backend yielding non-empty text wins; if every backend fails the handler
/// returns empty text rather than an error.
pub struct PdfHandler;

type PdfStrategy = fn(&Path) -> Result<String, FormatError>;

const PDF_STRATEGIES: &[(&str, PdfStrategy)] = &[
    ("pdf-extract", extract_pdf_layout),
    ("lopdf", extract_pdf_pages),
];

fn extract_pdf_layout(path: &Path) -> Result<String, FormatError> {
    pdf_extract::extract_text(path)
        .map_err(|e| FormatError::ProcessingError(format!("PDF extraction error: {}", e)))
}

fn extract_pdf_pages(path: &Path) -> Result<String, FormatError> {
    let document = lopdf::Document::load(path)
        .map_err(|e| FormatError::ProcessingError(format!("PDF load error: {}", e)))?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => debug!("skipping unreadable page {}: {}", page_number, e),
        }
    }
    Ok(text)
}

#[async_trait]
impl FormatHandler for PdfHandler {
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError> {
        for (name, strategy) in PDF_STRATEGIES {
            match strategy(file_path) {
                Ok(text) if !text.trim().is_empty() => return Ok(text),
                Ok(_) => debug!("{} produced no text for {}", name, file_path.display()),
                Err(e) => warn!("{} failed for {}: {}", name, file_path.display(), e),
            }
        }
        Ok(String::new())
    }

    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["pdf"]
    }
}

/// Handler for Word documents
pub struct WordHandler;

#[async_trait]
impl FormatHandler for WordHandler {
    async fn extract_text(&self, file_path: &Path) -> Result<String, FormatError> {
        let content = fs::read(file_path).map_err(FormatError::FileReadError)?;

        let docx = read_docx(&content)
            .map_err(|e| FormatError::ProcessingError(format!("Word parsing error: {}", e)))?;

        let document: Value = serde_json::from_str(&docx.json())
            .map_err(|e| FormatError::ProcessingError(format!("JSON parsing error: {}", e)))?;

        // Paragraph texts in document order, one per line.
        let mut text = String::new();
        if let Some(paragraphs) = document
            .pointer("/document/children")
            .and_then(Value::as_array)
        {
            for paragraph in paragraphs {
                let mut line = String::new();
                collect_runs(paragraph, &mut line);
                text.push_str(line.trim_end());
                text.push('\n');
            }
        }

        Ok(text)
    }

    fn supported_extensions(&self) -> Vec<&'static str> {
        vec!["docx", "doc"]
    }
}

fn collect_runs(node: &Value, out: &mut String) {
    if let Value::Object(map) = node {
        if let Some(Value::String(text)) = map.get("text") {
            out.push_str(text);
            out.push(' ');
        }
        if let Some(data) = map.get("data") {
            collect_runs(data, out);
        }
        if let Some(Value::Array(children)) = map.get("children") {
            for child in children {
                collect_runs(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_accepts_case_and_dot_variants() {
        assert_eq!(
            DocumentFormat::from_extension(".PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_extension("docx").unwrap(),
            DocumentFormat::Word
        );
        assert_eq!(
            DocumentFormat::from_extension(".doc").unwrap(),
            DocumentFormat::Word
        );
        assert_eq!(
            DocumentFormat::from_extension("txt").unwrap(),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_from_extension_rejects_unknown() {
        assert!(matches!(
            DocumentFormat::from_extension(".odt"),
            Err(FormatError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::from_extension(""),
            Err(FormatError::MissingExtension)
        ));
    }
}
