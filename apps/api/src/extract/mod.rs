//! Format-dispatching text extraction for uploaded documents.
//!
//! Every upload arrives as raw bytes plus the MIME type the client declared.
//! Dispatch is purely on that declared type; the decode libraries are treated
//! as black boxes and their errors never escape this module.

pub mod cache;
mod docx;
mod pdf;

use bytes::Bytes;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// One uploaded file: raw bytes plus the MIME type declared by the client.
/// Consumed once by extraction and discarded.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Outcome of a single extraction. `Unsupported` and `Failed` are distinct
/// variants so callers never have to guess what an empty string means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Unsupported,
    Failed,
}

impl Extraction {
    /// The extracted text, if there is any worth matching against.
    /// Whitespace-only output is treated the same as a failed extraction.
    pub fn text(&self) -> Option<&str> {
        match self {
            Extraction::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Maps a document to plain text, dispatching on the declared MIME type.
///
/// PDF and Word-processing types go through their decode libraries, any
/// `text/*` type is decoded as strict UTF-8, and everything else is
/// `Unsupported`. Decode errors become `Failed` rather than propagating.
pub fn extract(document: &UploadedDocument) -> Extraction {
    let content_type = document.content_type.to_ascii_lowercase();

    if content_type == PDF_MIME || content_type.contains("pdf") {
        pdf::extract(&document.bytes)
    } else if content_type == DOCX_MIME || content_type.contains("word") {
        docx::extract(&document.bytes)
    } else if content_type.starts_with("text/") {
        match std::str::from_utf8(&document.bytes) {
            Ok(text) => Extraction::Text(text.to_string()),
            Err(_) => Extraction::Failed,
        }
    } else {
        Extraction::Unsupported
    }
}
