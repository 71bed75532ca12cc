//! Text extraction: turns uploaded bytes into plain text for the analysis core.
//!
//! Pluggable, trait-based: `AppState` holds an `Arc<dyn TextExtractor>`.
//! Default: `DocumentExtractor` (plain text, PDF via `pdf-extract`, DOCX via `zip`).

pub mod docx;

use thiserror::Error;

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Failed to read document: {0}")]
    Parse(String),

    #[error("Document contains no extractable text")]
    Empty,
}

/// Media types the default extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    PlainText,
    Pdf,
    Docx,
}

impl MediaType {
    /// Parses a declared MIME type, ignoring parameters and case.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(MIME_PLAIN_TEXT) {
            Some(MediaType::PlainText)
        } else if essence.eq_ignore_ascii_case(MIME_PDF) {
            Some(MediaType::Pdf)
        } else if essence.eq_ignore_ascii_case(MIME_DOCX) {
            Some(MediaType::Docx)
        } else {
            None
        }
    }
}

/// The extractor trait. Implement this to swap backends without touching
/// the handlers.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], media_type: &str) -> Result<String, ExtractionError>;
}

pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, bytes: &[u8], media_type: &str) -> Result<String, ExtractionError> {
        let text = match MediaType::from_mime(media_type) {
            Some(MediaType::PlainText) => String::from_utf8_lossy(bytes).into_owned(),
            Some(MediaType::Pdf) => extract_pdf_text(bytes)?,
            Some(MediaType::Docx) => docx::extract_docx_text(bytes)?,
            None => return Err(ExtractionError::UnsupportedType(media_type.to_string())),
        };

        if text.trim().is_empty() {
            return Err(ExtractionError::Empty);
        }
        Ok(text)
    }
}

/// `pdf-extract` panics on some malformed font tables; those surface as parse errors.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractionError::Parse("PDF: unreadable content stream".to_string()))?
        .map_err(|e| ExtractionError::Parse(format!("PDF: {e}")))
}
