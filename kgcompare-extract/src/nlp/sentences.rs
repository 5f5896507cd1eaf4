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

//! Sentence boundary detection

use super::lexicon::ABBREVIATIONS;

/// Characters that may trail a terminator and still belong to the sentence
fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '”' | '’' | '»' | '.' | '!' | '?'
    )
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '“' | '\'' | '‘' | '(' | '[' | '«')
}

/// Split text into trimmed, non-empty sentence slices.
///
/// A line break always ends a sentence. Within a line a sentence ends at
/// `.`, `!` or `?` (with any closing quotes, brackets and trailing citation
/// markers) followed by whitespace and an uppercase letter, a digit or an
/// opening quote. Periods after abbreviations and initials do not split.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for line in text.lines() {
        split_line(line, &mut out);
    }
    out
}

fn split_line<'a>(line: &'a str, out: &mut Vec<&'a str>) {
    let bytes = line.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let end = consume_closers(line, i + 1);
            if end < line.len() && is_boundary(line, i, end) {
                push_trimmed(&line[start..end], out);
                start = end;
                i = end;
                continue;
            }
            i = end;
            continue;
        }
        i += 1;
    }
    push_trimmed(&line[start..], out);
}

fn push_trimmed<'a>(segment: &'a str, out: &mut Vec<&'a str>) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Advance past closing punctuation and bracketed numeric citation markers
fn consume_closers(line: &str, mut end: usize) -> usize {
    loop {
        let rest = &line[end..];
        let Some(c) = rest.chars().next() else {
            return end;
        };
        if is_closer(c) {
            end += c.len_utf8();
        } else if c == '[' {
            match citation_marker_len(rest) {
                Some(len) => end += len,
                None => return end,
            }
        } else {
            return end;
        }
    }
}

/// Length of a leading `[12]`, `[1, 2]` or `[3-5]` marker
fn citation_marker_len(rest: &str) -> Option<usize> {
    let close = rest.find(']')?;
    if close > 16 {
        return None;
    }
    let inner = &rest[1..close];
    let valid = inner.chars().any(|c| c.is_ascii_digit())
        && inner
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | ' ' | '-' | '–'));
    valid.then_some(close + 1)
}

fn is_boundary(line: &str, terminator: usize, end: usize) -> bool {
    let rest = &line[end..];
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let Some(next) = rest.trim_start().chars().next() else {
        return false;
    };
    if !(next.is_uppercase() || next.is_ascii_digit() || is_opener(next)) {
        return false;
    }
    !(line.as_bytes()[terminator] == b'.' && is_abbreviation(&line[..terminator]))
}

/// Whether the word ending right before a period is an abbreviation or initial
fn is_abbreviation(prefix: &str) -> bool {
    let word = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| is_opener(c));
    if word.is_empty() {
        return false;
    }
    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return first.is_alphabetic();
    }
    word.contains('.') || ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            split_sentences("Dogs bark. Cats meow! Do birds sing? Yes."),
            vec!["Dogs bark.", "Cats meow!", "Do birds sing?", "Yes."]
        );
    }

    #[test]
    fn test_abbreviations_and_initials() {
        assert_eq!(
            split_sentences("Dr. Smith met J. R. Tolkien in the U.S. He left."),
            vec!["Dr. Smith met J. R. Tolkien in the U.S. He left."]
        );
        assert_eq!(
            split_sentences("Smith et al. Reported it. Fine."),
            vec!["Smith et al. Reported it.", "Fine."]
        );
    }

    #[test]
    fn test_citation_markers_stay_with_sentence() {
        assert_eq!(
            split_sentences("Cattle are ruminants.[12] They graze.[3-5] Done."),
            vec!["Cattle are ruminants.[12]", "They graze.[3-5]", "Done."]
        );
    }

    #[test]
    fn test_lowercase_continuation_and_decimals() {
        assert_eq!(
            split_sentences("It weighs 3.5 kg. and more. Next one."),
            vec!["It weighs 3.5 kg. and more.", "Next one."]
        );
    }

    #[test]
    fn test_line_breaks_split() {
        assert_eq!(
            split_sentences("## History\nCattle were domesticated\n\nin Anatolia."),
            vec!["## History", "Cattle were domesticated", "in Anatolia."]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            split_sentences("He said \"Stop.\" Then he left."),
            vec!["He said \"Stop.\"", "Then he left."]
        );
    }
}
