//! Content-addressed memoization of extraction results.
//!
//! Extraction is a pure function of (MIME type, bytes), so a cached outcome
//! is always safe to reuse, including across unrelated sessions. The cache
//! is unbounded; uploads are already capped by the request body limit and a
//! single-session tool never accumulates enough distinct documents to matter.

use std::collections::HashMap;
use std::sync::Mutex;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::{extract, Extraction, UploadedDocument};

type CacheKey = [u8; 32];

#[derive(Default)]
pub struct ExtractionCache {
    entries: Mutex<HashMap<CacheKey, Extraction>>,
}

impl ExtractionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts through the cache: identical documents decode once.
    pub fn extract(&self, document: &UploadedDocument) -> Extraction {
        let key = cache_key(document);

        if let Ok(entries) = self.entries.lock() {
            if let Some(hit) = entries.get(&key) {
                debug!("extraction cache hit");
                return hit.clone();
            }
        }

        let outcome = extract(document);

        // A poisoned lock just means this result is not remembered.
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, outcome.clone());
        }

        outcome
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }
}

/// SHA-256 over the declared type and the payload, with a separator so
/// (type, bytes) pairs cannot collide by concatenation.
fn cache_key(document: &UploadedDocument) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update(document.content_type.as_bytes());
    hasher.update([0u8]);
    hasher.update(&document.bytes);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn doc(content_type: &str, bytes: &[u8]) -> UploadedDocument {
        UploadedDocument {
            bytes: Bytes::copy_from_slice(bytes),
            content_type: content_type.to_string(),
        }
    }

    #[test]
    fn test_identical_documents_share_one_entry() {
        let cache = ExtractionCache::new();
        let document = doc("text/plain", b"rust engineer");

        let first = cache.extract(&document);
        let second = cache.extract(&document);

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_types_are_distinct_entries() {
        let cache = ExtractionCache::new();
        cache.extract(&doc("text/plain", b"payload"));
        cache.extract(&doc("image/png", b"payload"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failures_are_cached_too() {
        let cache = ExtractionCache::new();
        let document = doc("application/pdf", b"not a pdf");

        assert_eq!(cache.extract(&document), Extraction::Failed);
        assert_eq!(cache.extract(&document), Extraction::Failed);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_result_matches_direct_extraction() {
        let cache = ExtractionCache::new();
        let document = doc("text/plain", b"python developer with sql skills");
        assert_eq!(cache.extract(&document), extract(&document));
    }
}
