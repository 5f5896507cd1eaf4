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

//! Part-of-speech tagger
//!
//! Two passes: a lexical pass assigns closed-class tags, recognizes verb
//! inflections and falls back to suffix rules; a contextual pass resolves
//! every word that could be a verb by looking at its neighbours.

use super::lexicon::{
    ADJECTIVES, ADVERBS, AUXILIARIES, COORDINATORS, DETERMINERS, FIRST_NAMES, GPE_NAMES,
    IRREGULAR_NOUNS, IRREGULAR_VERBS, MONTHS, NEGATIONS, NORP_NAMES, NUMBER_WORDS,
    PERSON_TITLES, POSSESSIVES, PREPOSITIONS, PRONOUNS, RELATIVE_PRONOUNS, SUBORDINATORS,
    VERBS,
};
use super::lemmatizer::lemmatize;
use super::tokenizer::RawToken;
use super::Pos;

/// Inflection of a word that may be a verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbForm {
    Base,
    Third,
    Past,
    Gerund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lex {
    Tag(Pos),
    VerbLike(VerbForm),
}

impl Lex {
    fn looks_nominal(&self) -> bool {
        match self {
            Lex::Tag(pos) => matches!(pos, Pos::Noun | Pos::Propn),
            Lex::VerbLike(form) => matches!(form, VerbForm::Base | VerbForm::Third),
        }
    }
}

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "ity", "ism", "ist", "ship", "hood", "ance", "ence", "age",
    "ure", "dom", "logy", "ics",
];
const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "ical", "ional", "ual", "ural", "ial", "ic", "able", "ible", "less",
    "ish", "ian", "ese",
];
const CLAUSE_PUNCT: &[&str] = &[",", ";", ":", "(", ")", "-", "–", "—"];

/// Tag a tokenized sentence
pub fn tag(tokens: &[RawToken]) -> Vec<Pos> {
    let lowers: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let mut lex: Vec<Lex> = Vec::with_capacity(tokens.len());
    for i in 0..tokens.len() {
        let entry = lexical(tokens, &lowers, i, &lex);
        lex.push(entry);
    }

    let mut tags: Vec<Pos> = Vec::with_capacity(tokens.len());
    for i in 0..tokens.len() {
        let pos = match lex[i] {
            Lex::Tag(Pos::Adj) if adjective_heads_phrase(&lex, &tags, i) => Pos::Noun,
            Lex::Tag(pos) => pos,
            Lex::VerbLike(form) => resolve_verb_like(&lowers, &lex, &tags, i, form),
        };
        tags.push(pos);
    }
    tags
}

/// A determiner followed by an adjective with nothing nominal after it
/// (`a mammal`, `the rich`) makes the adjective the phrase head
fn adjective_heads_phrase(lex: &[Lex], tags: &[Pos], i: usize) -> bool {
    let after_det = i > 0 && tags[i - 1] == Pos::Det;
    let modifies_next = lex.get(i + 1).is_some_and(|next| {
        next.looks_nominal() || matches!(next, Lex::Tag(Pos::Adj | Pos::Num) | Lex::VerbLike(_))
    });
    after_det && !modifies_next
}

fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn is_acronym(text: &str) -> bool {
    text.chars().count() >= 2
        && text.chars().all(|c| c.is_ascii_uppercase() || c == '&')
        && text.chars().any(|c| c.is_ascii_uppercase())
}

fn is_participle(lower: &str) -> bool {
    lower == "been" || IRREGULAR_VERBS.contains_key(lower) || (lower.len() > 4 && lower.ends_with("ed"))
}

/// Next token that is not an adverb or negation
fn skip_adverbs<'a>(lowers: &'a [String], from: usize) -> Option<&'a str> {
    lowers[from..]
        .iter()
        .map(String::as_str)
        .find(|w| !ADVERBS.contains(w) && !NEGATIONS.contains(w))
}

fn lexical(tokens: &[RawToken], lowers: &[String], i: usize, done: &[Lex]) -> Lex {
    let text = tokens[i].text.as_str();
    let lower = lowers[i].as_str();
    let initial = i == 0 || done[..i].iter().all(|l| *l == Lex::Tag(Pos::Punct));
    let prev = i.checked_sub(1).map(|p| done[p]);

    if text.starts_with('[') || !text.chars().any(char::is_alphanumeric) {
        return Lex::Tag(Pos::Punct);
    }
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        return Lex::Tag(Pos::Num);
    }
    match lower {
        "not" | "n't" => return Lex::Tag(Pos::Part),
        "'s" | "’s" => {
            return if prev == Some(Lex::Tag(Pos::Pron)) {
                Lex::Tag(Pos::Aux)
            } else {
                Lex::Tag(Pos::Part)
            }
        }
        "'re" | "'ve" | "'ll" | "'d" | "'m" => return Lex::Tag(Pos::Aux),
        "e.g." | "i.e." | "etc." => return Lex::Tag(Pos::Adv),
        _ => {}
    }
    if text.ends_with('.') {
        let bare = lower.trim_end_matches('.');
        return if bare.contains('.') || PERSON_TITLES.contains(bare) || is_capitalized(text) {
            Lex::Tag(Pos::Propn)
        } else {
            Lex::Tag(Pos::X)
        };
    }
    if !initial && is_capitalized(text) && MONTHS.contains(lower) {
        return Lex::Tag(Pos::Propn);
    }

    if let Some(lemma) = AUXILIARIES.get(lower) {
        return match *lemma {
            "have" => match skip_adverbs(lowers, i + 1) {
                Some(next) if is_participle(next) => Lex::Tag(Pos::Aux),
                _ => Lex::Tag(Pos::Verb),
            },
            "do" => match skip_adverbs(lowers, i + 1) {
                Some(next) if VERBS.contains(next) || next == "be" || next == "have" => {
                    Lex::Tag(Pos::Aux)
                }
                _ => Lex::Tag(Pos::Verb),
            },
            _ => Lex::Tag(Pos::Aux),
        };
    }
    if lower == "to" {
        let next = lowers.get(i + 1).map(String::as_str).unwrap_or("");
        return if VERBS.contains(next) || matches!(next, "be" | "have" | "do") {
            Lex::Tag(Pos::Part)
        } else {
            Lex::Tag(Pos::Adp)
        };
    }
    if lower == "that" {
        let after_nominal = matches!(
            prev,
            Some(Lex::Tag(Pos::Noun | Pos::Propn | Pos::Pron)) | Some(Lex::VerbLike(VerbForm::Third))
        );
        return if after_nominal {
            Lex::Tag(Pos::Pron)
        } else {
            Lex::Tag(Pos::Sconj)
        };
    }
    if DETERMINERS.contains(lower) {
        return Lex::Tag(Pos::Det);
    }
    if NUMBER_WORDS.contains(lower) {
        return Lex::Tag(Pos::Num);
    }
    if PRONOUNS.contains(lower) || POSSESSIVES.contains(lower) || RELATIVE_PRONOUNS.contains(lower) {
        return Lex::Tag(Pos::Pron);
    }
    if COORDINATORS.contains(lower) {
        return Lex::Tag(Pos::Cconj);
    }
    if PREPOSITIONS.contains(lower) {
        return Lex::Tag(Pos::Adp);
    }
    if SUBORDINATORS.contains(lower) {
        return Lex::Tag(Pos::Sconj);
    }
    if ADVERBS.contains(lower) || NEGATIONS.contains(lower) {
        return Lex::Tag(Pos::Adv);
    }

    if is_acronym(text) {
        return Lex::Tag(Pos::Propn);
    }
    if is_capitalized(text) {
        if !initial {
            return Lex::Tag(Pos::Propn);
        }
        if GPE_NAMES.contains(lower) || FIRST_NAMES.contains(lower) || NORP_NAMES.contains(lower) {
            return Lex::Tag(Pos::Propn);
        }
    }

    match open_class(lower) {
        Some(entry) => entry,
        None if initial && is_capitalized(text) && !lower.ends_with('s') => Lex::Tag(Pos::Propn),
        None => Lex::Tag(Pos::Noun),
    }
}

/// Lexicon and suffix evidence for an open-class word, `None` when there
/// is none
fn open_class(lower: &str) -> Option<Lex> {
    if IRREGULAR_NOUNS.contains_key(lower) {
        return Some(Lex::Tag(Pos::Noun));
    }
    if ADJECTIVES.contains(lower) {
        return Some(Lex::Tag(Pos::Adj));
    }
    if IRREGULAR_VERBS.contains_key(lower) {
        return Some(Lex::VerbLike(VerbForm::Past));
    }
    if VERBS.contains(lower) {
        return Some(Lex::VerbLike(VerbForm::Base));
    }

    let verb_lemma = lemmatize(lower, Pos::Verb);
    if VERBS.contains(verb_lemma.as_str()) {
        if lower.ends_with("ing") {
            return Some(Lex::VerbLike(VerbForm::Gerund));
        }
        if lower.ends_with("ed") {
            return Some(Lex::VerbLike(VerbForm::Past));
        }
        if lower.ends_with('s') {
            return Some(Lex::VerbLike(VerbForm::Third));
        }
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return Some(Lex::Tag(Pos::Adv));
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(Lex::Tag(Pos::Noun));
    }
    if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(Lex::Tag(Pos::Adj));
    }
    if lower.len() > 4 && lower.ends_with("ed") {
        return Some(Lex::VerbLike(VerbForm::Past));
    }
    if lower.len() > 5 && lower.ends_with("ing") {
        return Some(Lex::VerbLike(VerbForm::Gerund));
    }
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        return Some(Lex::Tag(Pos::Noun));
    }
    None
}

/// Whether a finite verb already occurs in the clause ending at `upto`
fn clause_has_verb(lowers: &[String], tags: &[Pos], upto: usize) -> bool {
    for j in (0..=upto).rev() {
        match tags[j] {
            Pos::Verb | Pos::Aux => return true,
            Pos::Cconj | Pos::Sconj => return false,
            Pos::Pron if RELATIVE_PRONOUNS.contains(lowers[j].as_str()) => return false,
            Pos::Punct if CLAUSE_PUNCT.contains(&lowers[j].as_str()) => return false,
            _ => {}
        }
    }
    false
}

fn resolve_verb_like(
    lowers: &[String],
    lex: &[Lex],
    tags: &[Pos],
    i: usize,
    form: VerbForm,
) -> Pos {
    let prev = (0..i).rev().find(|&j| {
        !(tags[j] == Pos::Adv || (tags[j] == Pos::Part && lowers[j] != "to"))
    });
    let next_nominal = lex.get(i + 1).is_some_and(Lex::looks_nominal);
    let modifier_form = matches!(form, VerbForm::Past | VerbForm::Gerund);

    let Some(j) = prev else {
        return match form {
            VerbForm::Gerund | VerbForm::Third => Pos::Noun,
            VerbForm::Base | VerbForm::Past => Pos::Verb,
        };
    };

    match tags[j] {
        Pos::Aux | Pos::Part => Pos::Verb,
        Pos::Det | Pos::Num | Pos::Adj => {
            if modifier_form && next_nominal {
                Pos::Adj
            } else {
                Pos::Noun
            }
        }
        Pos::Pron if POSSESSIVES.contains(lowers[j].as_str()) && lowers[j] != "her" => {
            if modifier_form && next_nominal {
                Pos::Adj
            } else {
                Pos::Noun
            }
        }
        Pos::Pron => Pos::Verb,
        Pos::Noun | Pos::Propn => {
            if !clause_has_verb(lowers, tags, j) || modifier_form {
                Pos::Verb
            } else {
                Pos::Noun
            }
        }
        Pos::Adp => Pos::Noun,
        Pos::Cconj => {
            let after_verb = j.checked_sub(1).is_some_and(|k| tags[k] == Pos::Verb);
            let finite = matches!(form, VerbForm::Past | VerbForm::Third);
            if after_verb || (finite && tags[..j].iter().any(|t| t.is_verbal())) {
                Pos::Verb
            } else {
                Pos::Noun
            }
        }
        _ => match form {
            VerbForm::Base => Pos::Noun,
            _ => Pos::Verb,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenize;

    fn tags(s: &str) -> Vec<(String, Pos)> {
        let toks = tokenize(s);
        let tags = tag(&toks);
        toks.into_iter().map(|t| t.text).zip(tags).collect()
    }

    fn tag_of(s: &str, word: &str) -> Pos {
        tags(s)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, p)| p)
            .unwrap()
    }

    #[test]
    fn test_simple_clause() {
        let t = tags("The domestic dog eats meat.");
        let pos: Vec<Pos> = t.into_iter().map(|(_, p)| p).collect();
        assert_eq!(
            pos,
            vec![Pos::Det, Pos::Adj, Pos::Noun, Pos::Verb, Pos::Noun, Pos::Punct]
        );
    }

    #[test]
    fn test_copula_and_participles() {
        assert_eq!(tag_of("Cattle are herbivores.", "are"), Pos::Aux);
        assert_eq!(tag_of("Cattle are herbivores.", "Cattle"), Pos::Noun);
        assert_eq!(tag_of("Paris is located in France.", "located"), Pos::Verb);
        assert_eq!(tag_of("Paris is located in France.", "France"), Pos::Propn);
        assert_eq!(tag_of("Paris is located in France.", "Paris"), Pos::Propn);
    }

    #[test]
    fn test_have_main_verb_vs_auxiliary() {
        assert_eq!(tag_of("The dog has four legs.", "has"), Pos::Verb);
        assert_eq!(tag_of("The dog has eaten.", "has"), Pos::Aux);
    }

    #[test]
    fn test_participle_as_modifier() {
        assert_eq!(tag_of("They are large domesticated mammals.", "domesticated"), Pos::Adj);
        assert_eq!(tag_of("The breed is old.", "breed"), Pos::Noun);
    }

    #[test]
    fn test_to_infinitive() {
        assert_eq!(tag_of("Farmers want to breed cattle.", "to"), Pos::Part);
        assert_eq!(tag_of("Farmers want to breed cattle.", "breed"), Pos::Verb);
        assert_eq!(tag_of("They went to Paris.", "to"), Pos::Adp);
    }

    #[test]
    fn test_markers_and_numbers() {
        assert_eq!(tag_of("Cows graze.[12]", "[12]"), Pos::Punct);
        assert_eq!(tag_of("It weighs 1,400 kg.", "1,400"), Pos::Num);
    }
}
