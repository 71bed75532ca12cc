//! Section Segmenter: splits résumé text into titled sections.
//!
//! A fold over trimmed, non-empty lines carrying a single piece of state: the
//! currently open section. Lines before the first heading have nowhere to go
//! and are dropped; name and contact lines usually live there and are picked
//! up by the contact extractor instead.

use crate::analysis::document::{Section, SectionTitle};

/// Headings longer than this are treated as prose.
pub const HEADING_MAX_CHARS: usize = 50;

/// Category → heading aliases. Iteration order resolves overlaps: the first
/// category with a matching alias wins.
pub const SECTION_HEADINGS: &[(SectionTitle, &[&str])] = &[
    (
        SectionTitle::Experience,
        &[
            "EXPERIENCE",
            "WORK EXPERIENCE",
            "EMPLOYMENT HISTORY",
            "PROFESSIONAL EXPERIENCE",
            "WORK HISTORY",
        ],
    ),
    (
        SectionTitle::Education,
        &[
            "EDUCATION",
            "ACADEMIC BACKGROUND",
            "QUALIFICATIONS",
            "ACADEMIC HISTORY",
        ],
    ),
    (
        SectionTitle::Skills,
        &[
            "SKILLS",
            "TECHNICAL SKILLS",
            "CORE COMPETENCIES",
            "TECHNOLOGIES",
            "SKILLS & EXPERTISE",
        ],
    ),
    (
        SectionTitle::Projects,
        &[
            "PROJECTS",
            "PERSONAL PROJECTS",
            "ACADEMIC PROJECTS",
            "KEY PROJECTS",
        ],
    ),
    (
        SectionTitle::Summary,
        &[
            "SUMMARY",
            "PROFESSIONAL SUMMARY",
            "PROFILE",
            "OBJECTIVE",
            "ABOUT ME",
            "BIO",
        ],
    ),
];

/// Splits `text` into sections in source order.
pub fn segment(text: &str) -> Vec<Section> {
    let (mut sections, open) = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(
            (Vec::new(), None::<Section>),
            |(mut sections, open), line| match classify_heading(line) {
                Some(title) => {
                    sections.extend(open);
                    (sections, Some(Section::open(title)))
                }
                None => {
                    let open = open.map(|mut section| {
                        section.content.push_str(line);
                        section.content.push('\n');
                        section
                    });
                    (sections, open)
                }
            },
        );
    sections.extend(open);
    sections
}

/// Returns the category when `line` reads as a section heading.
pub fn classify_heading(line: &str) -> Option<SectionTitle> {
    let cleaned = normalize_line(line);
    if cleaned.chars().count() >= HEADING_MAX_CHARS {
        return None;
    }
    let upper = cleaned.to_uppercase();
    SECTION_HEADINGS
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| heading_matches(&upper, alias)))
        .map(|(title, _)| *title)
}

fn heading_matches(upper: &str, alias: &str) -> bool {
    if upper == alias {
        return true;
    }
    if let Some(rest) = upper.strip_prefix(alias) {
        if rest == ":" || rest.starts_with(' ') {
            return true;
        }
    }
    upper
        .strip_suffix(alias)
        .is_some_and(|head| head.ends_with(' '))
}

/// Collapses whitespace runs and rejoins spaced-out capitals, so
/// `"E X P E R I E N C E"` reads as `"EXPERIENCE"`.
pub fn normalize_line(line: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut letters = String::new();

    for word in line.split_whitespace() {
        let mut chars = word.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), None, _) if c.is_ascii_uppercase() => letters.push(c),
            // "S K I L L S:" closes its run with the colon attached
            (Some(c), Some(':'), None) if c.is_ascii_uppercase() && !letters.is_empty() => {
                letters.push(c);
                letters.push(':');
                flush_letters(&mut letters, &mut words);
            }
            _ => {
                flush_letters(&mut letters, &mut words);
                words.push(word.to_string());
            }
        }
    }
    flush_letters(&mut letters, &mut words);
    words.join(" ")
}

fn flush_letters(letters: &mut String, words: &mut Vec<String>) {
    // a lone capital ("A", "I") flushes as the ordinary word it is
    if !letters.is_empty() {
        words.push(std::mem::take(letters));
    }
}
