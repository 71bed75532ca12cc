//! Keyword Extractor: finds canonical skill terms in arbitrary text.
//!
//! Two passes, unioned:
//! 1. Phrase scan over the vocabulary with alphanumeric boundaries. Catches
//!    multi-word and symbol-bearing terms ("version control", "c++", "ci/cd").
//! 2. Token scan with alias normalization ("js" → "javascript") plus a
//!    letters-then-digits heuristic for versioned tech ("html5", "es6").

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::taxonomy::{self, SKILL_TERMS};

/// Canonical lowercase skill terms. Sorted iteration doubles as the output order.
pub type KeywordSet = BTreeSet<String>;

const TOKEN_SEPARATORS: &[char] = &['/', ',', '(', ')'];

static VERSIONED_TOKEN: OnceLock<Regex> = OnceLock::new();

fn versioned_token() -> &'static Regex {
    VERSIONED_TOKEN.get_or_init(|| Regex::new(r"^[a-z]+[0-9]+$").expect("static pattern"))
}

/// Extracts every canonical skill term present in `text`.
pub fn extract(text: &str) -> KeywordSet {
    let mut keywords = phrase_scan(&text.to_lowercase());
    keywords.extend(token_scan(text));
    keywords
}

fn phrase_scan(haystack: &str) -> KeywordSet {
    SKILL_TERMS
        .iter()
        .filter(|term| contains_bounded(haystack, term))
        .map(|term| taxonomy::canonicalize(term).to_string())
        .collect()
}

fn token_scan(text: &str) -> KeywordSet {
    text.replace(TOKEN_SEPARATORS, " ")
        .split_whitespace()
        .filter_map(|raw| {
            let token = normalize_token(raw);
            if taxonomy::is_canonical(&token)
                || (versioned_token().is_match(&token) && !taxonomy::is_stopword(&token))
            {
                Some(token)
            } else {
                None
            }
        })
        .collect()
}

fn normalize_token(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    taxonomy::canonicalize(&lowered).to_string()
}

/// True when `needle` occurs in `haystack` with a non-alphanumeric character
/// (or the string edge) on both sides. Every start offset is tried, so a
/// rejected occurrence never hides a later bounded one.
fn contains_bounded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        // advance by one char to stay on a UTF-8 boundary
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
