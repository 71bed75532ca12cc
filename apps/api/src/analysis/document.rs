use serde::{Deserialize, Serialize};

use crate::analysis::contact::{extract_contact, ContactInfo};
use crate::analysis::segmenter::segment;

/// Section categories recognized by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionTitle {
    Experience,
    Education,
    Skills,
    Projects,
    Summary,
}

impl SectionTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Experience => "EXPERIENCE",
            SectionTitle::Education => "EDUCATION",
            SectionTitle::Skills => "SKILLS",
            SectionTitle::Projects => "PROJECTS",
            SectionTitle::Summary => "SUMMARY",
        }
    }
}

impl std::fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled run of résumé lines, frozen once the next heading is seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: SectionTitle,
    /// Original (trimmed) lines, each terminated by `\n`.
    pub content: String,
}

impl Section {
    pub(crate) fn open(title: SectionTitle) -> Self {
        Self {
            title,
            content: String::new(),
        }
    }
}

/// Everything the core knows about one résumé. Built once per input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub raw_text: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<String>,
    /// Source order; same-titled sections stay separate.
    pub sections: Vec<Section>,
}

impl DocumentRecord {
    /// Segments `text` and extracts contact details from the whole of it.
    pub fn from_text(text: &str) -> Self {
        let ContactInfo { email, phone, links } = extract_contact(text);
        Self {
            raw_text: text.to_string(),
            email,
            phone,
            links,
            sections: segment(text),
        }
    }

    pub fn has_section(&self, title: SectionTitle) -> bool {
        self.sections.iter().any(|s| s.title == title)
    }
}
