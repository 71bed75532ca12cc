// Deterministic résumé analysis: segmentation, contact extraction, keyword
// matching and scoring. No network, no randomness, no shared mutable state;
// the only process-wide data is the read-only taxonomy and compiled patterns.

pub mod contact;
pub mod document;
pub mod handlers;
pub mod jd_match;
pub mod keywords;
pub mod scoring;
pub mod segmenter;
pub mod taxonomy;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::document::DocumentRecord;
use crate::analysis::scoring::{score_document, ScoreResult};

/// A segmented document together with its intrinsic score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub document: DocumentRecord,
    pub scoring: ScoreResult,
}

/// Runs the full pipeline over already-decoded text.
pub fn analyze_text(text: &str) -> Analysis {
    let document = DocumentRecord::from_text(text);
    debug!(
        chars = document.raw_text.chars().count(),
        sections = document.sections.len(),
        links = document.links.len(),
        "document segmented"
    );

    let scoring = score_document(&document);
    debug!(
        score = scoring.score,
        section = scoring.breakdown.section_score,
        contact = scoring.breakdown.contact_score,
        keyword = scoring.breakdown.keyword_score,
        formatting = scoring.breakdown.formatting_score,
        "document scored"
    );

    Analysis { document, scoring }
}
