//! Text extraction — turns an uploaded document into normalized lowercase text.

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is not a readable PDF: {0}")]
    UnreadablePdf(String),

    #[error("document is not valid UTF-8 text")]
    NotUtf8,

    #[error("extraction did not finish within {0} seconds")]
    TimedOut(u64),
}

/// Upload formats the screener accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Resolves the kind from a MIME type, falling back to the file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let by_mime = content_type.and_then(|ct| {
            let essence = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            match essence.as_str() {
                "application/pdf" => Some(Self::Pdf),
                "text/plain" => Some(Self::PlainText),
                _ => None,
            }
        });

        by_mime.or_else(|| {
            let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
            match ext.as_str() {
                "pdf" => Some(Self::Pdf),
                "txt" => Some(Self::PlainText),
                _ => None,
            }
        })
    }

    pub fn extractor(self) -> &'static dyn TextExtractor {
        match self {
            Self::Pdf => &PdfTextExtractor,
            Self::PlainText => &PlainTextExtractor,
        }
    }
}

/// Converts raw document bytes into normalized text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF extraction via `pdf-extract`. Pages are decoded in order; image-only
/// pages contribute nothing.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed content streams
        let decoded = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }))
        .map_err(|_| ExtractionError::UnreadablePdf("decoder aborted".to_string()))?
        .map_err(|e| ExtractionError::UnreadablePdf(e.to_string()))?;

        Ok(normalize(&decoded))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ExtractionError::NotUtf8)?;
        Ok(normalize(text))
    }
}

/// Lowercases and collapses every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
