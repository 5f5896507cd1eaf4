// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Document reader
//!
//! Source documents arrive as text exports with a metadata header and a
//! marked content section:
//!
//! ```text
//! Wikipedia Data Export
//! Query: Cattle
//! ================================================================================
//! 📖 Title: Cattle
//! 🔗 URL: https://en.wikipedia.org/wiki/Cattle
//! 📝 Word Count: 12,345
//! 📄 Character Count: 80,000
//! 📚 References: 210
//! ================================================================================
//!
//! 📄 ARTICLE CONTENT:
//! Cattle are large domesticated ...
//! ```
//!
//! Only the content section is analyzed. A file without a content marker is
//! treated as content in full.

use crate::error::{KgError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Content markers, most specific first
const CONTENT_MARKERS: &[&str] = &[
    "📄 Full Content:",
    "📄 ARTICLE CONTENT (Structured):",
    "📄 ARTICLE CONTENT:",
];

static TITLE_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"📖 Title:\s*(.+)"));
static URL_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"🔗 URL:\s*(\S+)"));
static WORD_COUNT_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"📝 Word Count:\s*([\d,]+)"));
static CHAR_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| header_regex(r"📄 Character Count:\s*([\d,]+)"));
static REFERENCES_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"📚 References:\s*(\d+)"));
static SECTIONS_RE: Lazy<Regex> = Lazy::new(|| header_regex(r"📑 Sections:\s*([\d,]+)"));
/// Trailing reference listing, optionally preceded by a `=` rule
static REFERENCE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| header_regex(r"(?m)(?:^=+\s*\n)?^📚 REFERENCES \(\d+\):"));

fn header_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid header regex pattern")
}

/// Metadata parsed from the export header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub url: Option<String>,
    pub word_count: Option<u64>,
    pub char_count: Option<u64>,
    pub reference_count: Option<u64>,
    pub section_count: Option<u64>,
}

/// A source document split into metadata and analyzable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub body: String,
}

impl Document {
    /// Whitespace-delimited word count of the body
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Read and split a document from disk
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| KgError::io(path, e))?;
    let doc = read_document_str(&raw);
    debug!(
        path = %path.display(),
        bytes = raw.len(),
        body_bytes = doc.body.len(),
        "Read document"
    );
    Ok(doc)
}

/// Split in-memory export text into metadata and body
pub fn read_document_str(raw: &str) -> Document {
    let (header, body) = match find_content_marker(raw) {
        Some((start, marker)) => {
            let body = &raw[start + marker.len()..];
            (&raw[..start], strip_reference_block(body).trim().to_string())
        }
        None => ("", raw.to_string()),
    };

    Document {
        metadata: parse_metadata(if header.is_empty() { raw } else { header }),
        body,
    }
}

fn find_content_marker(raw: &str) -> Option<(usize, &'static str)> {
    CONTENT_MARKERS
        .iter()
        .find_map(|marker| raw.find(marker).map(|pos| (pos, *marker)))
}

fn strip_reference_block(body: &str) -> &str {
    match REFERENCE_BLOCK_RE.find(body) {
        Some(m) => &body[..m.start()],
        None => body,
    }
}

/// Parse the export header. Absent or malformed fields are left empty.
pub fn parse_metadata(header: &str) -> DocumentMetadata {
    DocumentMetadata {
        title: capture(&TITLE_RE, header).map(|s| s.trim().to_string()),
        url: capture(&URL_RE, header).map(str::to_string),
        word_count: capture(&WORD_COUNT_RE, header).and_then(parse_count),
        char_count: capture(&CHAR_COUNT_RE, header).and_then(parse_count),
        reference_count: capture(&REFERENCES_RE, header).and_then(parse_count),
        section_count: capture(&SECTIONS_RE, header).and_then(parse_count),
    }
}

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn parse_count(s: &str) -> Option<u64> {
    s.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "Wikipedia Data Export\n\
Query: Cattle\n\
Timestamp: 2025-01-01T00:00:00\n\
================================================================================\n\
📖 Title: Cattle\n\
🔗 URL: https://en.wikipedia.org/wiki/Cattle\n\
📝 Word Count: 12,345\n\
📄 Character Count: 80,000\n\
📚 References: 210\n\
================================================================================\n\
\n\
📄 ARTICLE CONTENT:\n\
Cattle are large domesticated mammals. They are herbivores.\n\
\n\
================================================================================\n\
📚 REFERENCES (2):\n\
================================================================================\n\
  [1] https://example.org/a\n\
  [2] https://example.org/b\n";

    #[test]
    fn test_parse_export() {
        let doc = read_document_str(EXPORT);
        assert_eq!(
            doc.body,
            "Cattle are large domesticated mammals. They are herbivores."
        );
        assert_eq!(doc.metadata.title.as_deref(), Some("Cattle"));
        assert_eq!(
            doc.metadata.url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Cattle")
        );
        assert_eq!(doc.metadata.word_count, Some(12_345));
        assert_eq!(doc.metadata.char_count, Some(80_000));
        assert_eq!(doc.metadata.reference_count, Some(210));
        assert_eq!(doc.metadata.section_count, None);
    }

    #[test]
    fn test_full_content_marker() {
        let raw = "📖 Title: X\n📄 Full Content: Body text here.";
        let doc = read_document_str(raw);
        assert_eq!(doc.body, "Body text here.");
        assert_eq!(doc.metadata.title.as_deref(), Some("X"));
    }

    #[test]
    fn test_structured_marker_preferred_over_plain() {
        let raw = "📄 ARTICLE CONTENT (Structured):\n## Intro\nText.";
        let doc = read_document_str(raw);
        assert_eq!(doc.body, "## Intro\nText.");
    }

    #[test]
    fn test_no_marker_is_whole_file() {
        let raw = "Just some prose.\nMore prose.";
        let doc = read_document_str(raw);
        assert_eq!(doc.body, raw);
        assert_eq!(doc.metadata, DocumentMetadata::default());
        assert_eq!(doc.word_count(), 5);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = read_document("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, KgError::Io { .. }));
    }
}
