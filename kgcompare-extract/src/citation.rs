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

//! Citation marker detection
//!
//! A sentence is cited when it carries a bracketed reference, a
//! parenthetical year, `et al.`, an editorial `[citation needed]` style
//! marker, or an attribution phrase ("according to", "research shows", ...)
//! that is followed closely by something that looks like a source.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

static MARKERS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"\[\d+\]",
        r"\[\d+(?:,\s*\d+)+\]",
        r"\[\d+\s*[-–]\s*\d+\]",
        r"\(\d{4}[a-z]?\)",
        r"(?i)\bet al\.",
        r"(?i)\[(?:citation needed|who\??|when\??|where\??|clarification needed|according to whom\??|by whom\??|dubious|failed verification|verification needed|better source needed)\]",
    ])
    .expect("Invalid citation regex pattern")
});

static ATTRIBUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:according to|as stated in|as reported by|as cited in|research shows|studies (?:show|indicate)|findings suggest|data from)\b",
    )
    .expect("Invalid citation regex pattern")
});

/// Something resembling a source: a digit, `Name et al`, or an opening
/// bracket or parenthesis. Matched case-sensitively.
static SOURCE_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d|\b[A-Z][a-z]+\s+et\s+al|[\[(]").expect("Invalid citation regex pattern")
});

pub const DEFAULT_LOOKAHEAD_CHARS: usize = 50;

/// Detects citation markers in sentence text
#[derive(Debug, Clone)]
pub struct CitationDetector {
    lookahead_chars: usize,
}

impl Default for CitationDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_CHARS)
    }
}

impl CitationDetector {
    /// `lookahead_chars` bounds how far after an attribution phrase a
    /// source indicator may appear
    pub fn new(lookahead_chars: usize) -> Self {
        Self { lookahead_chars }
    }

    pub fn has_citation(&self, text: &str) -> bool {
        if MARKERS.is_match(text) {
            return true;
        }
        ATTRIBUTION.find_iter(text).any(|m| {
            let following = &text[m.end()..];
            let window_end = following
                .char_indices()
                .nth(self.lookahead_chars)
                .map(|(i, _)| i)
                .unwrap_or(following.len());
            SOURCE_HINT.is_match(&following[..window_end])
        })
    }
}
