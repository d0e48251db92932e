//! PDF text decoding via `pdf-extract`.

use super::ExtractError;

pub fn extract_text_from_pdf(file_bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(file_bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
