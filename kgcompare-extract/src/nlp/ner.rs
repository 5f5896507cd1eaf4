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

//! Gazetteer and shape based named-entity recognizer

use super::lexicon::{
    EVENT_WORDS, FIRST_NAMES, GPE_NAMES, MONTHS, NAME_CONNECTORS, NORP_NAMES, ORG_SUFFIXES,
    PERSON_TITLES,
};
use super::{EntitySpan, Pos, Token};
use kgcompare_core::EntityLabel;

const LOCATIVE_PREPOSITIONS: &[&str] = &["in", "at", "from", "near", "to", "across"];

/// Find entity spans over the tokens of one sentence
pub fn recognize(text: &str, tokens: &[Token]) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        let found = if tok.pos == Pos::Propn && MONTHS.contains(tok.lower.as_str()) {
            Some(date_span(tokens, i))
        } else if tok.pos == Pos::Propn {
            Some(name_span(tokens, i))
        } else if tok.pos == Pos::Num {
            Some(number_span(tokens, i))
        } else {
            None
        };

        match found {
            Some((end, label)) => {
                spans.push(EntitySpan {
                    start: i,
                    end,
                    label,
                    text: text[tokens[i].start..tokens[end - 1].end].to_string(),
                });
                i = end;
            }
            None => i += 1,
        }
    }
    spans
}

fn is_year(tok: &Token) -> bool {
    tok.text.len() == 4
        && tok.text.chars().all(|c| c.is_ascii_digit())
        && tok.text.starts_with(['1', '2'])
}

/// `March`, `March 1990`, `March 4, 1990`
fn date_span(tokens: &[Token], i: usize) -> (usize, EntityLabel) {
    let mut end = i + 1;
    while end < tokens.len() {
        let tok = &tokens[end];
        let comma_then_number = tok.text == ","
            && tokens.get(end + 1).is_some_and(|n| n.pos == Pos::Num);
        if tok.pos == Pos::Num || comma_then_number {
            end += 1;
        } else {
            break;
        }
    }
    (end, EntityLabel::Date)
}

fn number_span(tokens: &[Token], i: usize) -> (usize, EntityLabel) {
    if is_year(&tokens[i]) {
        return (i + 1, EntityLabel::Date);
    }
    let mut end = i + 1;
    while end < tokens.len() && tokens[end].pos == Pos::Num && !is_year(&tokens[end]) {
        end += 1;
    }
    (end, EntityLabel::Cardinal)
}

/// Capitalized run with internal connectors such as `of`, `de` or `&`
fn name_span(tokens: &[Token], i: usize) -> (usize, EntityLabel) {
    let mut end = i + 1;
    while end < tokens.len() {
        let tok = &tokens[end];
        if tok.pos == Pos::Propn {
            end += 1;
        } else if NAME_CONNECTORS.contains(tok.lower.as_str())
            && tokens.get(end + 1).is_some_and(|n| n.pos == Pos::Propn)
        {
            end += 2;
        } else {
            break;
        }
    }
    let words: Vec<String> = tokens[i..end]
        .iter()
        .map(|t| t.lower.trim_end_matches('.').to_string())
        .collect();
    let preceded_by_locative = i
        .checked_sub(1)
        .is_some_and(|p| LOCATIVE_PREPOSITIONS.contains(&tokens[p].lower.as_str()));
    (end, classify_name(&tokens[i..end], &words, preceded_by_locative))
}

fn classify_name(run: &[Token], words: &[String], preceded_by_locative: bool) -> EntityLabel {
    let first = words[0].as_str();
    let last = words[words.len() - 1].as_str();
    let has_connector = words.iter().any(|w| NAME_CONNECTORS.contains(w.as_str()));

    if ORG_SUFFIXES.contains(last) || (has_connector && ORG_SUFFIXES.contains(first)) {
        return EntityLabel::Org;
    }
    if words.iter().any(|w| EVENT_WORDS.contains(w.as_str())) {
        return EntityLabel::Event;
    }
    if PERSON_TITLES.contains(first) || FIRST_NAMES.contains(first) {
        return EntityLabel::Person;
    }
    if GPE_NAMES.contains(last) {
        return EntityLabel::Gpe;
    }

    if run.len() == 1 {
        let text = run[0].text.as_str();
        if NORP_NAMES.contains(first) {
            return EntityLabel::Norp;
        }
        if text.contains('.') && text.len() <= 6 {
            return EntityLabel::Gpe;
        }
        if text.len() >= 2 && text.chars().all(|c| c.is_ascii_uppercase() || c == '&') {
            return EntityLabel::Org;
        }
        return if preceded_by_locative {
            EntityLabel::Gpe
        } else {
            EntityLabel::Misc
        };
    }

    if !has_connector && run.len() <= 3 {
        EntityLabel::Person
    } else {
        EntityLabel::Org
    }
}
