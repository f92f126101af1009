use std::collections::HashSet;

/// Upper bound on keyword suggestions returned per analysis.
pub const MAX_SUGGESTIONS: usize = 5;

/// Keyword-gap suggestions: terms the job description uses that the résumé
/// never does.
///
/// Tokenization is deliberately naive — lowercase, split on whitespace,
/// punctuation left attached. Terms are taken in order of first appearance
/// in the job text so the output is deterministic, capped at
/// `MAX_SUGGESTIONS`.
pub fn suggest_improvements(resume_text: &str, job_text: &str) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    let resume_terms: HashSet<&str> = resume_lower.split_whitespace().collect();

    let job_lower = job_text.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut suggestions = Vec::new();

    for term in job_lower.split_whitespace() {
        if resume_terms.contains(term) || !seen.insert(term) {
            continue;
        }
        suggestions.push(format!("Include keyword '{term}'"));
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "python developer with sql skills";
    const JOB: &str = "python developer with aws and sql experience";

    #[test]
    fn test_missing_terms_are_suggested_in_job_order() {
        let suggestions = suggest_improvements(RESUME, JOB);
        assert_eq!(
            suggestions,
            vec![
                "Include keyword 'aws'",
                "Include keyword 'and'",
                "Include keyword 'experience'",
            ]
        );
    }

    #[test]
    fn test_no_suggestion_repeats_a_resume_term() {
        let suggestions = suggest_improvements(RESUME, JOB);
        let resume_terms: HashSet<&str> = RESUME.split_whitespace().collect();
        for suggestion in &suggestions {
            let term = suggestion
                .trim_start_matches("Include keyword '")
                .trim_end_matches('\'');
            assert!(!resume_terms.contains(term), "suggested {term}");
        }
    }

    #[test]
    fn test_at_most_five_suggestions() {
        let job = "one two three four five six seven eight nine";
        let suggestions = suggest_improvements("nothing shared", job);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_superset_resume_yields_nothing() {
        let suggestions = suggest_improvements(JOB, "python developer");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let suggestions = suggest_improvements("PYTHON Developer", "python developer");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_duplicate_job_terms_suggested_once() {
        let suggestions = suggest_improvements("", "rust rust rust tokio");
        assert_eq!(
            suggestions,
            vec!["Include keyword 'rust'", "Include keyword 'tokio'"]
        );
    }

    #[test]
    fn test_empty_job_text_yields_nothing() {
        assert!(suggest_improvements(RESUME, "").is_empty());
    }
}
