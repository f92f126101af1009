use serde::Serialize;

/// Discrete feedback bucket for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Great,
    Moderate,
    Low,
}

impl MatchTier {
    /// User-facing message for the tier.
    pub fn message(&self) -> &'static str {
        match self {
            MatchTier::Great => "Great match! Your resume aligns well with the job.",
            MatchTier::Moderate => "Moderate match. Consider tailoring your resume more.",
            MatchTier::Low => "Low match. Try adding relevant skills and experience.",
        }
    }
}

/// Buckets a score using closed lower bounds: a score exactly at a cutoff
/// lands in the higher tier. Total for every score when `ok <= good`; the
/// caller validates the threshold ordering before getting here.
pub fn classify(score: f64, threshold_good: f64, threshold_ok: f64) -> MatchTier {
    if score >= threshold_good {
        MatchTier::Great
    } else if score >= threshold_ok {
        MatchTier::Moderate
    } else {
        MatchTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_at_good_threshold_is_great() {
        assert_eq!(classify(0.7, 0.7, 0.4), MatchTier::Great);
    }

    #[test]
    fn test_score_at_ok_threshold_is_moderate() {
        assert_eq!(classify(0.4, 0.7, 0.4), MatchTier::Moderate);
    }

    #[test]
    fn test_score_below_ok_threshold_is_low() {
        assert_eq!(classify(0.39, 0.7, 0.4), MatchTier::Low);
    }

    #[test]
    fn test_perfect_score_is_great_for_any_threshold() {
        for good in [0.0, 0.05, 0.5, 0.95, 1.0] {
            assert_eq!(classify(1.0, good, good / 2.0), MatchTier::Great);
        }
    }

    #[test]
    fn test_equal_thresholds_skip_moderate() {
        assert_eq!(classify(0.5, 0.5, 0.5), MatchTier::Great);
        assert_eq!(classify(0.49, 0.5, 0.5), MatchTier::Low);
    }

    #[test]
    fn test_classification_is_total_over_score_range() {
        // Every score in [0, 1] lands in exactly one tier.
        for step in 0..=100 {
            let score = f64::from(step) / 100.0;
            let tier = classify(score, 0.7, 0.4);
            let expected = if score >= 0.7 {
                MatchTier::Great
            } else if score >= 0.4 {
                MatchTier::Moderate
            } else {
                MatchTier::Low
            };
            assert_eq!(tier, expected, "score {score}");
        }
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&MatchTier::Great).unwrap(), "\"great\"");
        assert_eq!(serde_json::to_string(&MatchTier::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_messages_are_distinct() {
        assert_ne!(MatchTier::Great.message(), MatchTier::Moderate.message());
        assert_ne!(MatchTier::Moderate.message(), MatchTier::Low.message());
    }
}
