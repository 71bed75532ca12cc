//! Contact Extractor: email, phone and links pulled from the whole raw text.
//!
//! Patterns are heuristics, not validators: they aim to recognize the common
//! résumé spellings and accept the occasional false positive.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+";
/// (123) 456-7890, 123-456-7890, 123.456.7890, +1 123 456 7890
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}";
const LINK_PATTERN: &str = r"https?://\S+|www\.\S+";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Every link in source order, duplicates included.
    pub links: Vec<String>,
}

struct ContactPatterns {
    email: Regex,
    phone: Regex,
    link: Regex,
}

static PATTERNS: OnceLock<ContactPatterns> = OnceLock::new();

fn patterns() -> &'static ContactPatterns {
    PATTERNS.get_or_init(|| ContactPatterns {
        email: Regex::new(EMAIL_PATTERN).expect("static email pattern"),
        phone: Regex::new(PHONE_PATTERN).expect("static phone pattern"),
        link: Regex::new(LINK_PATTERN).expect("static link pattern"),
    })
}

pub fn extract_contact(text: &str) -> ContactInfo {
    let patterns = patterns();
    ContactInfo {
        email: patterns.email.find(text).map(|m| m.as_str().to_string()),
        phone: patterns.phone.find(text).map(|m| m.as_str().to_string()),
        links: patterns
            .link
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}
