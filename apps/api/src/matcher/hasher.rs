use std::collections::HashSet;
use std::hash::Hasher;

use stop_words::{get, LANGUAGE};
use twox_hash::XxHash64;

/// Seed for the token hash. Fixed so vectors are stable across processes
/// and restarts.
const HASH_SEED: u64 = 0;

/// Vocabulary-free text vectorizer: each surviving token hashes to one of
/// `n_features` buckets and the bucket counts form the feature vector.
///
/// Construction materializes the English stop list once; transformation
/// holds no state, so a single instance can be shared freely.
pub struct FeatureHasher {
    n_features: usize,
    stop_words: HashSet<String>,
}

impl FeatureHasher {
    /// `n_features` must be a power of two; the bucket index is a mask
    /// over the low bits of the token hash.
    pub fn new(n_features: usize) -> Self {
        assert!(
            n_features.is_power_of_two(),
            "n_features must be a power of two"
        );
        Self {
            n_features,
            stop_words: get(LANGUAGE::English).into_iter().collect(),
        }
    }

    /// Projects text into a fixed-length non-negative count vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.n_features];
        for token in tokenize(text) {
            if self.stop_words.contains(&token) {
                continue;
            }
            vector[self.bucket(&token)] += 1.0;
        }
        vector
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = XxHash64::with_seed(HASH_SEED);
        hasher.write(token.as_bytes());
        (hasher.finish() as usize) & (self.n_features - 1)
    }
}

/// Lowercased alphanumeric runs of at least two characters. Single-letter
/// fragments carry no matching signal and mostly come from punctuation
/// splits like "don't".
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
}
