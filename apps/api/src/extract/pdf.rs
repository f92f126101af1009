use pdf_extract::extract_text_from_mem;
use tracing::warn;

use super::Extraction;

/// Decodes a PDF byte payload to plain text. Any library error is
/// swallowed into `Failed` — the caller only learns that extraction
/// produced nothing usable.
pub(super) fn extract(data: &[u8]) -> Extraction {
    match extract_text_from_mem(data) {
        Ok(text) => Extraction::Text(text),
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            Extraction::Failed
        }
    }
}
