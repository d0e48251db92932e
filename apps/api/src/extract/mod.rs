//! Text Acquisition — decodes an uploaded document into plain text.
//!
//! Format is decided by file-name suffix alone; the pipeline downstream
//! consumes only the decoded string and has no knowledge of file formats.

pub mod docx;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type '{0}': only PDF and DOCX are supported")]
    UnsupportedFormat(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX text extraction failed: {0}")]
    Docx(String),
}

/// Decodes `file_bytes` as PDF or DOCX based on the file-name suffix
/// (case-insensitive). Any other suffix is an unsupported format — fatal
/// for this one document, the caller skips it and continues.
pub fn extract_text(file_name: &str, file_bytes: &[u8]) -> Result<String, ExtractError> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        pdf::extract_text_from_pdf(file_bytes)
    } else if lower.ends_with(".docx") {
        docx::extract_text_from_docx(file_bytes)
    } else {
        Err(ExtractError::UnsupportedFormat(file_name.to_string()))
    }
}
