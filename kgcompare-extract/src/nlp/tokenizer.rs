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

//! Word tokenizer with byte offsets

use super::lexicon::ABBREVIATIONS;

/// Token text with byte offsets into the tokenized string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl RawToken {
    fn new(source: &str, start: usize, end: usize) -> Self {
        Self {
            text: source[start..end].to_string(),
            start,
            end,
        }
    }
}

const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Tokenize one sentence.
///
/// Words keep internal hyphens and apostrophes, numbers keep internal `,`
/// and `.`, bracketed citation markers stay whole and clitics are split off.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |k: usize| chars.get(k).map(|&(b, _)| b).unwrap_or(text.len());
    let mut tokens = Vec::new();
    let mut k = 0;

    while k < chars.len() {
        let (start, c) = chars[k];
        if c.is_whitespace() {
            k += 1;
            continue;
        }

        if c == '[' {
            if let Some(len) = bracket_marker_len(&text[start..]) {
                tokens.push(RawToken::new(text, start, start + len));
                while k < chars.len() && chars[k].0 < start + len {
                    k += 1;
                }
                continue;
            }
        }

        if c.is_alphanumeric() {
            let end_k = scan_word(&chars, k);
            let mut end = byte_at(end_k);
            let mut next_k = end_k;
            let period_follows = chars.get(end_k).map(|&(_, c)| c) == Some('.');
            if period_follows && takes_trailing_period(&text[start..end]) {
                end += 1;
                next_k += 1;
            }
            push_word(text, start, end, &mut tokens);
            k = next_k;
            continue;
        }

        tokens.push(RawToken::new(text, start, start + c.len_utf8()));
        k += 1;
    }
    tokens
}

fn scan_word(chars: &[(usize, char)], mut k: usize) -> usize {
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let start = k;
    while let Some(c) = at(k) {
        let next = at(k + 1);
        let prev = if k > start { at(k - 1) } else { None };
        let take = if c.is_alphanumeric() {
            true
        } else if matches!(c, '-' | '\'' | '’') {
            next.is_some_and(char::is_alphanumeric)
        } else if matches!(c, ',' | '.') && prev.is_some_and(|p| p.is_ascii_digit()) {
            next.is_some_and(|n| n.is_ascii_digit())
        } else if c == '.' {
            // dotted abbreviations such as U.S or e.g
            prev.is_some_and(char::is_alphabetic)
                && next.is_some_and(char::is_alphabetic)
                && at(k + 2).map_or(true, |a| !a.is_alphanumeric())
                && (k == start + 1 || at(k.wrapping_sub(2)) == Some('.'))
        } else {
            false
        };
        if !take {
            break;
        }
        k += 1;
    }
    k
}

/// Abbreviations and initials absorb their trailing period
fn takes_trailing_period(word: &str) -> bool {
    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return first.is_uppercase();
    }
    (word.contains('.') && !word.chars().any(|c| c.is_ascii_digit()))
        || ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

/// Push a word, splitting a trailing clitic into its own token
fn push_word(text: &str, start: usize, end: usize, tokens: &mut Vec<RawToken>) {
    let word = &text[start..end];
    let normalized = word.replace('’', "'").to_lowercase();
    for clitic in CLITICS {
        if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
            // the clitic is ASCII after normalization; map its length back
            // onto the original, which may use a curly apostrophe
            let clitic_chars = clitic.chars().count();
            let split = word
                .char_indices()
                .rev()
                .nth(clitic_chars - 1)
                .map(|(i, _)| i)
                .unwrap_or(0);
            if split > 0 {
                tokens.push(RawToken::new(text, start, start + split));
                tokens.push(RawToken::new(text, start + split, end));
                return;
            }
        }
    }
    tokens.push(RawToken::new(text, start, end));
}

/// Length of a `[12]`, `[1, 2]`, `[3-5]` or `[citation needed]` marker
fn bracket_marker_len(rest: &str) -> Option<usize> {
    let close = rest.find(']')?;
    if close > 40 {
        return None;
    }
    let inner = &rest[1..close];
    if inner.trim().is_empty() || inner.contains('[') {
        return None;
    }
    let numeric = inner
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ',' | ' ' | '-' | '–'));
    let editorial = inner.chars().all(|c| c.is_alphabetic() || c == ' ');
    (numeric || editorial).then_some(close + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<String> {
        tokenize(s).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            texts("Cattle are large, domesticated mammals."),
            vec!["Cattle", "are", "large", ",", "domesticated", "mammals", "."]
        );
    }

    #[test]
    fn test_offsets() {
        let toks = tokenize("The cow");
        assert_eq!(toks[1].start, 4);
        assert_eq!(toks[1].end, 7);
    }

    #[test]
    fn test_numbers_and_hyphens() {
        assert_eq!(
            texts("About 1,400 long-horned cattle weigh 3.5 tonnes."),
            vec!["About", "1,400", "long-horned", "cattle", "weigh", "3.5", "tonnes", "."]
        );
    }

    #[test]
    fn test_clitics() {
        assert_eq!(texts("The dog's tail"), vec!["The", "dog", "'s", "tail"]);
        assert_eq!(texts("It doesn't eat"), vec!["It", "does", "n't", "eat"]);
        assert_eq!(texts("O'Brien left"), vec!["O'Brien", "left"]);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(
            texts("Dr. Smith lives in the U.S. today"),
            vec!["Dr.", "Smith", "lives", "in", "the", "U.S.", "today"]
        );
        assert_eq!(texts("e.g. cows"), vec!["e.g.", "cows"]);
    }

    #[test]
    fn test_citation_markers() {
        assert_eq!(
            texts("Cows graze.[12][citation needed]"),
            vec!["Cows", "graze", ".", "[12]", "[citation needed]"]
        );
    }

    #[test]
    fn test_unicode_offsets() {
        let toks = tokenize("Café über");
        assert_eq!(toks.len(), 2);
        assert_eq!(&"Café über"[toks[1].start..toks[1].end], "über");
    }
}
