//! Scoring Engine: intrinsic completeness/quality score for a résumé.
//!
//! Four capped, additive axes:
//! - sections   (40): 10 per required category present
//! - contact    (15): 5 each for email, phone, at least one link
//! - keywords   (25): action verbs (15 flat above 5, else 2 per verb) plus a
//!   10-point length bonus strictly inside 500..5000 characters
//! - formatting (20): 20 flat above 5 bullet markers, else 5
//!
//! The thresholds are calibrated and behavior-defining; keep them exact.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::document::{DocumentRecord, SectionTitle};

pub const REQUIRED_SECTIONS: &[SectionTitle] = &[
    SectionTitle::Experience,
    SectionTitle::Education,
    SectionTitle::Skills,
    SectionTitle::Summary,
];

pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "designed",
    "implemented",
    "created",
    "built",
    "engineered",
    "architected",
    "optimized",
    "reduced",
    "increased",
    "improved",
    "analyzed",
    "collaborated",
    "communicated",
    "coordinated",
    "launched",
    "mentored",
    "innovated",
    "resolved",
    "spearheaded",
];

const SECTION_CAP: u32 = 40;
const CONTACT_POINTS: u32 = 5;
const VERB_THRESHOLD: usize = 5;
const VERB_FLAT_POINTS: u32 = 15;
const VERB_POINTS_EACH: u32 = 2;
const LENGTH_MIN_CHARS: usize = 500;
const LENGTH_MAX_CHARS: usize = 5000;
const LENGTH_POINTS: u32 = 10;
const BULLET_THRESHOLD: usize = 5;
const BULLET_FULL_POINTS: u32 = 20;
const BULLET_BASE_POINTS: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub section_score: u32,
    pub contact_score: u32,
    pub keyword_score: u32,
    pub formatting_score: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.section_score + self.contact_score + self.keyword_score + self.formatting_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0 – 100
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    /// What the résumé already does well.
    pub details: Vec<String>,
    /// Non-fatal findings the author can act on.
    pub improvements: Vec<String>,
    /// One-line rating derived from `score`.
    pub summary: String,
}

/// Accumulates points and messages axis by axis.
#[derive(Default)]
struct Scorecard {
    breakdown: ScoreBreakdown,
    details: Vec<String>,
    improvements: Vec<String>,
}

static BULLET_MARKER: OnceLock<Regex> = OnceLock::new();

fn bullet_marker() -> &'static Regex {
    BULLET_MARKER.get_or_init(|| Regex::new("•| - ").expect("static bullet pattern"))
}

/// Scores a document. Pure: identical input always gives an identical result.
pub fn score_document(doc: &DocumentRecord) -> ScoreResult {
    let mut card = Scorecard::default();

    score_sections(doc, &mut card);
    score_contact(doc, &mut card);
    score_content(&doc.raw_text, &mut card);
    score_formatting(&doc.raw_text, &mut card);

    let score = card.breakdown.total().min(100);
    ScoreResult {
        score,
        breakdown: card.breakdown,
        details: card.details,
        improvements: card.improvements,
        summary: summarize(score).to_string(),
    }
}

fn score_sections(doc: &DocumentRecord, card: &mut Scorecard) {
    let mut found = 0u32;
    for required in REQUIRED_SECTIONS {
        if doc.has_section(*required) {
            found += 1;
            card.details.push(format!("Found section: {required}"));
        } else {
            card.improvements.push(format!(
                "Missing important section: {required}. consider adding it."
            ));
        }
    }
    card.breakdown.section_score = SECTION_CAP * found / REQUIRED_SECTIONS.len() as u32;
}

fn score_contact(doc: &DocumentRecord, card: &mut Scorecard) {
    if doc.email.is_some() {
        card.breakdown.contact_score += CONTACT_POINTS;
        card.details.push("Email detected".to_string());
    } else {
        card.improvements
            .push("Email address not found or unreadable.".to_string());
    }

    if doc.phone.is_some() {
        card.breakdown.contact_score += CONTACT_POINTS;
        card.details.push("Phone number detected".to_string());
    } else {
        card.improvements.push("Phone number not found.".to_string());
    }

    if doc.links.is_empty() {
        card.improvements
            .push("No links found (e.g. LinkedIn).".to_string());
    } else {
        card.breakdown.contact_score += CONTACT_POINTS;
        card.details.push(format!(
            "{} Link(s) detected (LinkedIn/Portfolio)",
            doc.links.len()
        ));
    }
}

fn score_content(text: &str, card: &mut Scorecard) {
    let verb_count = count_action_verbs(text);
    if verb_count > VERB_THRESHOLD {
        card.breakdown.keyword_score += VERB_FLAT_POINTS;
        card.details
            .push(format!("Good use of action verbs ({verb_count} found)"));
    } else {
        card.breakdown.keyword_score += VERB_POINTS_EACH * verb_count as u32;
        card.improvements.push(
            "Weak use of action verbs. Try using words like 'Managed', 'Developed', 'Optimized'."
                .to_string(),
        );
    }

    // Overly long text is deliberately neither rewarded nor flagged.
    let length = text.chars().count();
    if length > LENGTH_MIN_CHARS && length < LENGTH_MAX_CHARS {
        card.breakdown.keyword_score += LENGTH_POINTS;
        card.details.push("Resume length is optimal".to_string());
    } else if length < LENGTH_MIN_CHARS {
        card.improvements
            .push("Resume is too short. Elaborate on your experience.".to_string());
    }
}

fn score_formatting(text: &str, card: &mut Scorecard) {
    if count_bullets(text) > BULLET_THRESHOLD {
        card.breakdown.formatting_score = BULLET_FULL_POINTS;
        card.details.push("Good use of bullet points".to_string());
    } else {
        card.breakdown.formatting_score = BULLET_BASE_POINTS;
        card.improvements
            .push("Use more bullet points for readability.".to_string());
    }
}

/// Distinct verbs from `ACTION_VERBS` appearing anywhere (substring match).
pub fn count_action_verbs(text: &str) -> usize {
    let lower = text.to_lowercase();
    ACTION_VERBS
        .iter()
        .filter(|verb| lower.contains(*verb))
        .count()
}

/// Occurrences of `•` or ` - ` across the text.
pub fn count_bullets(text: &str) -> usize {
    bullet_marker().find_iter(text).count()
}

fn summarize(score: u32) -> &'static str {
    match score {
        80.. => "Excellent! Your resume is well-optimized.",
        60..=79 => "Good start, but there are areas for improvement.",
        _ => "Needs significant improvements to pass ATS filters.",
    }
}
