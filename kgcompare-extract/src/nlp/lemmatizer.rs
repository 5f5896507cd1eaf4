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

//! Lookup and suffix-rule lemmatizer

use super::lexicon::{AUXILIARIES, IRREGULAR_NOUNS, IRREGULAR_VERBS, VERBS};
use super::Pos;

/// Lemma of a lowercase token under the given tag
pub fn lemmatize(lower: &str, pos: Pos) -> String {
    if lower == "n't" {
        return "not".to_string();
    }
    match pos {
        Pos::Aux => AUXILIARIES
            .get(lower)
            .map(|l| l.to_string())
            .unwrap_or_else(|| match lower {
                "'s" => "be".to_string(),
                _ => lower.to_string(),
            }),
        Pos::Verb => verb_lemma(lower),
        Pos::Noun => noun_lemma(lower),
        _ => lower.to_string(),
    }
}

fn verb_lemma(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_VERBS.get(word).or_else(|| AUXILIARIES.get(word)) {
        return lemma.to_string();
    }
    if VERBS.contains(word) {
        return word.to_string();
    }

    let candidates: Vec<String> = if let Some(stem) = word.strip_suffix("ies") {
        vec![format!("{}y", stem)]
    } else if let Some(stem) = word.strip_suffix("ied") {
        vec![format!("{}y", stem)]
    } else if let Some(stem) = word.strip_suffix("ing") {
        inflection_stems(stem)
    } else if let Some(stem) = word.strip_suffix("ed") {
        let mut c = vec![format!("{}e", stem)];
        c.extend(inflection_stems(stem));
        c
    } else if let Some(stem) = word.strip_suffix("es") {
        if ends_with_sibilant(stem) || stem.ends_with('o') {
            vec![stem.to_string(), format!("{}e", stem)]
        } else {
            vec![format!("{}e", stem), stem.to_string()]
        }
    } else if let Some(stem) = word.strip_suffix('s').filter(|_| !word.ends_with("ss")) {
        vec![stem.to_string()]
    } else {
        Vec::new()
    };

    candidates
        .iter()
        .find(|c| VERBS.contains(c.as_str()))
        .or_else(|| fallback_candidate(word, &candidates))
        .cloned()
        .unwrap_or_else(|| word.to_string())
}

/// Stems for `-ing`/`-ed` forms: undoubled, as-is and e-restored
fn inflection_stems(stem: &str) -> Vec<String> {
    let mut out = Vec::new();
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        let last = bytes[bytes.len() - 1];
        if !matches!(last, b'l' | b's' | b'z' | b'f') && !is_vowel(last) {
            out.push(stem[..stem.len() - 1].to_string());
        }
    }
    out.push(stem.to_string());
    out.push(format!("{}e", stem));
    out
}

/// Without a lexicon hit take the first candidate, except that an `-ed`
/// form never falls back to its e-restored guess
fn fallback_candidate<'a>(word: &str, candidates: &'a [String]) -> Option<&'a String> {
    if word.ends_with("ed") {
        candidates.get(1)
    } else {
        candidates.first()
    }
}

fn noun_lemma(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_NOUNS.get(word) {
        return lemma.to_string();
    }
    if word.len() <= 3 || !word.ends_with('s') {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ends_with_sibilant(stem) {
            return stem.to_string();
        }
    }
    word[..word.len() - 1].to_string()
}

fn ends_with_sibilant(stem: &str) -> bool {
    ["s", "x", "z", "ch", "sh"].iter().any(|s| stem.ends_with(s))
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auxiliaries() {
        assert_eq!(lemmatize("are", Pos::Aux), "be");
        assert_eq!(lemmatize("was", Pos::Aux), "be");
        assert_eq!(lemmatize("has", Pos::Aux), "have");
        assert_eq!(lemmatize("n't", Pos::Part), "not");
    }

    #[test]
    fn test_verbs() {
        assert_eq!(lemmatize("eats", Pos::Verb), "eat");
        assert_eq!(lemmatize("grazes", Pos::Verb), "graze");
        assert_eq!(lemmatize("carries", Pos::Verb), "carry");
        assert_eq!(lemmatize("domesticated", Pos::Verb), "domesticate");
        assert_eq!(lemmatize("stopped", Pos::Verb), "stop");
        assert_eq!(lemmatize("running", Pos::Verb), "run");
        assert_eq!(lemmatize("located", Pos::Verb), "locate");
        assert_eq!(lemmatize("born", Pos::Verb), "bear");
        assert_eq!(lemmatize("has", Pos::Verb), "have");
        assert_eq!(lemmatize("walked", Pos::Verb), "walk");
    }

    #[test]
    fn test_nouns() {
        assert_eq!(lemmatize("herbivores", Pos::Noun), "herbivore");
        assert_eq!(lemmatize("species", Pos::Noun), "species");
        assert_eq!(lemmatize("breeds", Pos::Noun), "breed");
        assert_eq!(lemmatize("countries", Pos::Noun), "country");
        assert_eq!(lemmatize("foxes", Pos::Noun), "fox");
        assert_eq!(lemmatize("grass", Pos::Noun), "grass");
        assert_eq!(lemmatize("wolves", Pos::Noun), "wolf");
    }

    #[test]
    fn test_other_tags_lowercase_only() {
        assert_eq!(lemmatize("france", Pos::Propn), "france");
        assert_eq!(lemmatize("larger", Pos::Adj), "larger");
    }
}
