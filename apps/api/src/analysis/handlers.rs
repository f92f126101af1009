use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::analysis::feedback::suggest_improvements;
use crate::analysis::tiers::classify;
use crate::analysis::{preview, AnalyzeResponse, ChartSlice};
use crate::errors::AppError;
use crate::extract::UploadedDocument;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart form with two file fields, `resume` and `job`, plus optional
/// `threshold_good` / `threshold_ok` overrides. Runs the whole pipeline
/// synchronously and returns the rendered analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume: Option<UploadedDocument> = None;
    let mut job: Option<UploadedDocument> = None;
    let mut threshold_good = state.config.threshold_good;
    let mut threshold_ok = state.config.threshold_ok;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => resume = Some(read_document(field).await?),
            "job" => job = Some(read_document(field).await?),
            "threshold_good" => threshold_good = read_threshold(field, "threshold_good").await?,
            "threshold_ok" => threshold_ok = read_threshold(field, "threshold_ok").await?,
            other => {
                return Err(AppError::Validation(format!(
                    "Unexpected form field '{other}'"
                )))
            }
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    let job = job.ok_or_else(|| AppError::Validation("Missing 'job' file field".to_string()))?;

    if threshold_ok > threshold_good {
        return Err(AppError::Validation(format!(
            "threshold_ok ({threshold_ok}) must not exceed threshold_good ({threshold_good})"
        )));
    }

    // Both extractions complete before failure is reported. The client only
    // learns that extraction produced nothing usable, not which file or why.
    let resume_extraction = state.extraction_cache.extract(&resume);
    let job_extraction = state.extraction_cache.extract(&job);

    let (resume_text, job_text) = match (resume_extraction.text(), job_extraction.text()) {
        (Some(resume_text), Some(job_text)) => (resume_text.to_string(), job_text.to_string()),
        _ => {
            return Err(AppError::ExtractionFailed(
                "Could not extract text from one of the files.".to_string(),
            ))
        }
    };

    let score = state.scorer.score(&resume_text, &job_text);
    let tier = classify(score, threshold_good, threshold_ok);
    let suggestions = suggest_improvements(&resume_text, &job_text);

    info!(
        score,
        tier = ?tier,
        suggestions = suggestions.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        score,
        score_percent: format!("{:.2}%", score * 100.0),
        tier,
        message: tier.message(),
        suggestions,
        resume_preview: preview(&resume_text),
        job_preview: preview(&job_text),
        chart: vec![
            ChartSlice {
                label: "Match",
                value: score,
            },
            ChartSlice {
                label: "Gap",
                value: 1.0 - score,
            },
        ],
    }))
}

/// Reads one file field into an `UploadedDocument`. The field stream is
/// consumed exactly once; the declared content type travels with the bytes.
async fn read_document(field: Field<'_>) -> Result<UploadedDocument, AppError> {
    let content_type = field.content_type().unwrap_or_default().to_string();
    let bytes = field.bytes().await?;
    Ok(UploadedDocument {
        bytes,
        content_type,
    })
}

async fn read_threshold(field: Field<'_>, name: &str) -> Result<f64, AppError> {
    let raw = field.text().await?;
    let value = raw.parse::<f64>().map_err(|_| {
        AppError::Validation(format!("{name} must be a number, got '{raw}'"))
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::Validation(format!(
            "{name} must be within [0.0, 1.0], got {value}"
        )));
    }
    Ok(value)
}
