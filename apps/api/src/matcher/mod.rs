//! Similarity scoring between two extracted texts.
//!
//! Texts are projected into fixed-length hashed bag-of-words vectors and
//! compared with cosine similarity. No vocabulary, no fitting step: the
//! projection is a deterministic hash, so scoring is stateless and the same
//! pair of texts always produces the same score.

mod hasher;

pub use hasher::FeatureHasher;

/// Output dimensionality of the feature hasher. A power of two so the
/// bucket index is a cheap mask of the token hash. Tunable constant, not
/// derived from any corpus.
pub const N_FEATURES: usize = 8192;

/// Scoring seam. One backend today; a trait so the hashing scheme can be
/// swapped without touching the handlers that call it.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of two texts in [0.0, 1.0]. Symmetric in its arguments.
    fn score(&self, text_a: &str, text_b: &str) -> f64;
}

/// Hashed bag-of-words with cosine similarity — the default backend.
/// Holds the shared hasher; a fresh one with the same parameters would
/// score identically, just slower to set up.
pub struct HashingScorer {
    hasher: FeatureHasher,
}

impl HashingScorer {
    pub fn new() -> Self {
        Self {
            hasher: FeatureHasher::new(N_FEATURES),
        }
    }
}

impl Default for HashingScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer for HashingScorer {
    fn score(&self, text_a: &str, text_b: &str) -> f64 {
        let a = self.hasher.transform(text_a);
        let b = self.hasher.transform(text_b);
        cosine_similarity(&a, &b)
    }
}

/// Cosine similarity of two equal-length vectors, defined as 0.0 when
/// either vector is zero. Feature counts are non-negative, so the result
/// lands in [0, 1]; it is clamped at 1.0 against float drift on identical
/// inputs.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).min(1.0)
}
