//! JD Matcher: keyword coverage of a job description by a résumé.
//!
//! Algorithm:
//! 1. résumé keywords = extract(raw text + every section's content)
//! 2. JD keywords     = extract(JD text)
//! 3. partition JD keywords into matched / missing (sorted)
//! 4. score = round(coverage × 100), +10 when more than 5 matched but under 50
//! 5. verdict from the final score

use serde::{Deserialize, Serialize};

use crate::analysis::document::DocumentRecord;
use crate::analysis::keywords::{extract, KeywordSet};

const BONUS_MIN_MATCHED: usize = 5;
const BONUS_SCORE_CEILING: u32 = 50;
const BONUS_POINTS: u32 = 10;

/// Qualitative tier of a match score. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Weak Match")]
    WeakMatch,
    #[serde(rename = "Partial Match")]
    PartialMatch,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Strong Match")]
    StrongMatch,
}

impl Verdict {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Verdict::StrongMatch,
            60..=79 => Verdict::GoodMatch,
            40..=59 => Verdict::PartialMatch,
            _ => Verdict::WeakMatch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::WeakMatch => "Weak Match",
            Verdict::PartialMatch => "Partial Match",
            Verdict::GoodMatch => "Good Match",
            Verdict::StrongMatch => "Strong Match",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 – 100
    pub score: u32,
    pub verdict: Verdict,
    /// Alphabetical.
    pub matched_keywords: Vec<String>,
    /// Alphabetical.
    pub missing_keywords: Vec<String>,
    /// Size of the JD keyword set.
    pub total_keywords_found: usize,
    /// matched / total, rounded to two decimals.
    pub coverage: f64,
}

impl MatchResult {
    /// The JD yielded no keywords at all. A defined outcome, not an error.
    fn no_keywords() -> Self {
        Self {
            score: 0,
            verdict: Verdict::WeakMatch,
            matched_keywords: vec![],
            missing_keywords: vec![],
            total_keywords_found: 0,
            coverage: 0.0,
        }
    }
}

/// Keywords of the résumé: raw text plus each section's content.
pub fn resume_keywords(doc: &DocumentRecord) -> KeywordSet {
    let combined: Vec<&str> = std::iter::once(doc.raw_text.as_str())
        .chain(doc.sections.iter().map(|s| s.content.as_str()))
        .collect();
    extract(&combined.join(" "))
}

pub fn match_job_description(doc: &DocumentRecord, jd_text: &str) -> MatchResult {
    match_keyword_sets(&resume_keywords(doc), &extract(jd_text))
}

/// Scores JD keyword coverage by an already-extracted résumé keyword set.
pub fn match_keyword_sets(resume: &KeywordSet, jd: &KeywordSet) -> MatchResult {
    if jd.is_empty() {
        return MatchResult::no_keywords();
    }

    let (matched, missing): (Vec<String>, Vec<String>) =
        jd.iter().cloned().partition(|kw| resume.contains(kw));

    let total = jd.len();
    let coverage = matched.len() as f64 / total as f64;
    let mut score = (coverage * 100.0).round() as u32;
    if matched.len() > BONUS_MIN_MATCHED && score < BONUS_SCORE_CEILING {
        score += BONUS_POINTS;
    }
    let score = score.min(100);

    MatchResult {
        score,
        verdict: Verdict::from_score(score),
        matched_keywords: matched,
        missing_keywords: missing,
        total_keywords_found: total,
        coverage: (coverage * 100.0).round() / 100.0,
    }
}
