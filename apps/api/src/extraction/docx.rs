use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;
use zip::ZipArchive;

use crate::extraction::ExtractionError;

/// The main body part of a WordprocessingML package.
const DOCUMENT_PART: &str = "word/document.xml";

struct MarkupPatterns {
    paragraph_end: Regex,
    line_break: Regex,
    tab: Regex,
    any_tag: Regex,
}

static MARKUP: OnceLock<MarkupPatterns> = OnceLock::new();

fn markup() -> &'static MarkupPatterns {
    MARKUP.get_or_init(|| MarkupPatterns {
        paragraph_end: Regex::new(r"</w:p>").expect("static paragraph pattern"),
        line_break: Regex::new(r"<w:(?:br|cr)\b[^>]*/>").expect("static break pattern"),
        // bare run tabs only; tab-stop definitions carry attributes
        tab: Regex::new(r"<w:tab\s*/>").expect("static tab pattern"),
        any_tag: Regex::new(r"<[^>]*>").expect("static tag pattern"),
    })
}

/// Reads the raw text of a DOCX package, one line per paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Parse(format!("DOCX: {e}")))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Parse(format!("DOCX: {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Parse(format!("DOCX: {e}")))?;
    Ok(markup_to_text(&xml))
}

fn markup_to_text(xml: &str) -> String {
    let patterns = markup();
    let text = patterns.paragraph_end.replace_all(xml, "\n");
    let text = patterns.line_break.replace_all(&text, "\n");
    let text = patterns.tab.replace_all(&text, "\t");
    let text = patterns.any_tag.replace_all(&text, "");
    unescape_xml(&text)
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{SimpleFileOptions, ZipWriter};
    use zip::CompressionMethod;

    fn build_docx(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, body) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>EXPERIENCE</w:t></w:r></w:p><w:p><w:r><w:t>Built R&amp;D tooling</w:t><w:tab/><w:t>2021</w:t></w:r></w:p><w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p></w:body></w:document>"#;

    #[test]
    fn test_extracts_paragraphs_as_lines() {
        let bytes = build_docx(&[(DOCUMENT_PART, BODY)]);
        let text = extract_docx_text(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(
            lines,
            vec!["EXPERIENCE", "Built R&D tooling\t2021", "Line one", "Line two"]
        );
    }

    #[test]
    fn test_missing_document_part_is_parse_error() {
        let bytes = build_docx(&[("word/styles.xml", "<w:styles/>")]);
        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(msg) if msg.contains(DOCUMENT_PART)));
    }

    #[test]
    fn test_non_zip_bytes_are_parse_error() {
        assert!(matches!(
            extract_docx_text(b"plain bytes"),
            Err(ExtractionError::Parse(_))
        ));
    }

    #[test]
    fn test_unescape_handles_double_escaping_once() {
        assert_eq!(unescape_xml("a &amp;lt; b &lt; c"), "a &lt; b < c");
    }
}
