//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::document::DocumentRecord;
use crate::analysis::jd_match::{match_job_description, MatchResult};
use crate::analysis::{analyze_text, Analysis};
use crate::errors::AppError;
use crate::extraction::MIME_PLAIN_TEXT;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct JdMatchRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct JdMatchResponse {
    pub document: DocumentRecord,
    pub match_result: MatchResult,
}

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Segments and scores already-extracted résumé text.
pub async fn handle_analyze(Json(request): Json<AnalyzeRequest>) -> Json<Analysis> {
    let analysis = analyze_text(&request.text);
    info!(
        score = analysis.scoring.score,
        sections = analysis.document.sections.len(),
        "Resume analyzed"
    );
    Json(analysis)
}

/// POST /api/v1/resumes/upload
///
/// Multipart upload with a `file` part. The part's content type selects the
/// extractor backend; the extracted text then goes through the same pipeline
/// as `/analyze`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Analysis>, AppError> {
    let (file_name, media_type, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
            .ok_or_else(|| AppError::Validation(format!("No '{UPLOAD_FIELD}' provided")))?;

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let media_type = field.content_type().unwrap_or(MIME_PLAIN_TEXT).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(format!("Could not read upload: {e}"))
                } else {
                    AppError::Validation(format!("Could not read upload: {e}"))
                }
            })?;
        break (file_name, media_type, bytes);
    };

    if bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File exceeds the {} byte limit",
            state.config.max_upload_bytes
        )));
    }

    info!(file = %file_name, media_type = %media_type, size = bytes.len(), "Upload received");

    let extractor = state.extractor.clone();
    let extraction_media_type = media_type.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes, &extraction_media_type))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))?
        .map_err(|e| {
            warn!(file = %file_name, media_type = %media_type, "Extraction failed: {e}");
            AppError::from(e)
        })?;

    let analysis = analyze_text(&text);
    info!(
        file = %file_name,
        score = analysis.scoring.score,
        sections = analysis.document.sections.len(),
        "Resume analyzed"
    );
    Ok(Json(analysis))
}

/// POST /api/v1/resumes/jd-match
///
/// Keyword coverage of a job description by a résumé. An empty or skill-free
/// JD is not an error: it yields a zero-score Weak Match.
pub async fn handle_jd_match(Json(request): Json<JdMatchRequest>) -> Json<JdMatchResponse> {
    let document = DocumentRecord::from_text(&request.resume_text);
    let match_result = match_job_description(&document, &request.jd_text);
    info!(
        score = match_result.score,
        verdict = %match_result.verdict,
        matched = match_result.matched_keywords.len(),
        total = match_result.total_keywords_found,
        "JD match computed"
    );
    Json(JdMatchResponse {
        document,
        match_result,
    })
}
