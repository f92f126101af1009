//! The analyze pipeline: extract both uploads, score, tier, suggest, render.

pub mod feedback;
pub mod handlers;
pub mod tiers;

use serde::Serialize;

use crate::analysis::tiers::MatchTier;

/// How much of each extracted document is echoed back to the client.
pub const PREVIEW_CHARS: usize = 1000;

/// One slice of the match/gap proportion chart.
#[derive(Debug, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Everything the client needs to render one analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: f64,
    /// Score formatted for display, e.g. "87.25%".
    pub score_percent: String,
    pub tier: MatchTier,
    pub message: &'static str,
    pub suggestions: Vec<String>,
    pub resume_preview: String,
    pub job_preview: String,
    /// Two slices, match vs gap, summing to 1.0.
    pub chart: Vec<ChartSlice>,
}

/// First `PREVIEW_CHARS` characters of the text, with an ellipsis when
/// truncated. Counts characters, not bytes, so multi-byte text never
/// splits mid-codepoint.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_passes_through() {
        assert_eq!(preview("rust engineer"), "rust engineer");
    }

    #[test]
    fn test_exact_limit_is_not_truncated() {
        let text = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&text), text);
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        let text = "x".repeat(PREVIEW_CHARS + 1);
        let rendered = preview(&text);
        assert!(rendered.ends_with("..."));
        assert_eq!(rendered.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_multibyte_text_truncates_on_char_boundary() {
        let text = "é".repeat(PREVIEW_CHARS + 50);
        let rendered = preview(&text);
        assert!(rendered.ends_with("..."));
        assert_eq!(rendered.chars().count(), PREVIEW_CHARS + 3);
    }
}
