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

//! Rule-based English annotation pipeline
//!
//! Produces the annotation layers the extraction strategies consume:
//! sentence boundaries, tokens with byte offsets, Universal POS tags,
//! lowercase lemmas, a shallow dependency tree and named-entity spans.
//!
//! The pipeline is deterministic and fully offline. It is heuristic and
//! favours coverage over linguistic accuracy.

pub mod lexicon;
mod lemmatizer;
mod ner;
mod parser;
mod sentences;
mod tagger;
mod tokenizer;

pub use lemmatizer::lemmatize;
pub use sentences::split_sentences;
pub use tokenizer::{tokenize, RawToken};

use kgcompare_core::EntityLabel;
use std::fmt;
use tracing::trace;

/// Universal part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Det,
    Adp,
    Pron,
    Cconj,
    Sconj,
    Num,
    Part,
    Punct,
    X,
}

impl Pos {
    /// Heads of noun phrases
    pub fn is_nominal(&self) -> bool {
        matches!(self, Pos::Noun | Pos::Propn | Pos::Pron | Pos::Num)
    }

    pub fn is_verbal(&self) -> bool {
        matches!(self, Pos::Verb | Pos::Aux)
    }
}

/// Dependency relation label (ClearNLP style, as used by common English parsers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dep {
    Root,
    Nsubj,
    Nsubjpass,
    Dobj,
    Attr,
    Acomp,
    Pobj,
    Prep,
    Det,
    Amod,
    Compound,
    Nummod,
    Poss,
    Aux,
    Auxpass,
    Advmod,
    Neg,
    Cc,
    Conj,
    Punct,
    Case,
    Relcl,
    Acl,
    Advcl,
    Xcomp,
    Mark,
    Dep,
}

impl Dep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dep::Root => "ROOT",
            Dep::Nsubj => "nsubj",
            Dep::Nsubjpass => "nsubjpass",
            Dep::Dobj => "dobj",
            Dep::Attr => "attr",
            Dep::Acomp => "acomp",
            Dep::Pobj => "pobj",
            Dep::Prep => "prep",
            Dep::Det => "det",
            Dep::Amod => "amod",
            Dep::Compound => "compound",
            Dep::Nummod => "nummod",
            Dep::Poss => "poss",
            Dep::Aux => "aux",
            Dep::Auxpass => "auxpass",
            Dep::Advmod => "advmod",
            Dep::Neg => "neg",
            Dep::Cc => "cc",
            Dep::Conj => "conj",
            Dep::Punct => "punct",
            Dep::Case => "case",
            Dep::Relcl => "relcl",
            Dep::Acl => "acl",
            Dep::Advcl => "advcl",
            Dep::Xcomp => "xcomp",
            Dep::Mark => "mark",
            Dep::Dep => "dep",
        }
    }

    pub fn is_subject(&self) -> bool {
        matches!(self, Dep::Nsubj | Dep::Nsubjpass)
    }
}

impl fmt::Display for Dep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relations that make up a noun phrase when rendered as text
const PHRASE_DEPS: &[Dep] = &[Dep::Det, Dep::Amod, Dep::Compound, Dep::Prep, Dep::Pobj];

/// A fully annotated token. `head` is a sentence-local index; the root
/// points at itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub lower: String,
    pub lemma: String,
    pub pos: Pos,
    pub dep: Dep,
    pub head: usize,
    /// Byte offsets into the sentence text
    pub start: usize,
    pub end: usize,
    pub is_stop: bool,
}

impl Token {
    pub fn is_punct(&self) -> bool {
        self.pos == Pos::Punct
    }
}

/// Named-entity span over token indices `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    pub text: String,
}

/// One parsed sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
    /// Dependents of each token in sentence order, built once after parsing
    child_index: Vec<Vec<usize>>,
}

impl Sentence {
    fn new(index: usize, text: &str, tokens: Vec<Token>, entities: Vec<EntitySpan>) -> Self {
        let mut child_index = vec![Vec::new(); tokens.len()];
        for token in &tokens {
            if token.head != token.index && token.head < tokens.len() {
                child_index[token.head].push(token.index);
            }
        }
        Self {
            index,
            text: text.to_string(),
            tokens,
            entities,
            child_index,
        }
    }

    /// Direct dependents of token `i`, in sentence order
    pub fn children(&self, i: usize) -> impl Iterator<Item = &Token> + '_ {
        self.child_index
            .get(i)
            .into_iter()
            .flatten()
            .map(move |&c| &self.tokens[c])
    }

    /// Token `i` and every token it transitively governs, sorted
    pub fn subtree(&self, i: usize) -> Vec<usize> {
        if i >= self.tokens.len() {
            return Vec::new();
        }
        let mut visited = vec![false; self.tokens.len()];
        visited[i] = true;
        let mut stack = vec![i];
        while let Some(node) = stack.pop() {
            for &child in &self.child_index[node] {
                if !visited[child] {
                    visited[child] = true;
                    stack.push(child);
                }
            }
        }
        visited
            .iter()
            .enumerate()
            .filter_map(|(idx, &seen)| seen.then_some(idx))
            .collect()
    }

    /// Surface text of the phrase headed by token `i`: the token plus the
    /// subtrees of its determiner, modifier, compound and prepositional
    /// dependents, in sentence order
    pub fn full_phrase(&self, i: usize) -> String {
        let mut indices = vec![i];
        for child in self.children(i) {
            if PHRASE_DEPS.contains(&child.dep) {
                indices.extend(self.subtree(child.index));
            }
        }
        indices.sort_unstable();
        indices.dedup();
        indices
            .iter()
            .map(|&idx| self.tokens[idx].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    pub fn root(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.dep == Dep::Root)
    }
}

/// Explicitly constructed handle over the annotation pipeline.
///
/// Holds no mutable state; one instance can be shared across any number of
/// documents.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    _private: (),
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split, tokenize, tag, parse and run NER over `text`
    pub fn parse(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, sent)| self.parse_sentence(index, sent))
            .collect()
    }

    /// Annotate a single sentence
    pub fn parse_sentence(&self, index: usize, text: &str) -> Sentence {
        let raw = tokenize(text);
        let tags = tagger::tag(&raw);
        let mut tokens: Vec<Token> = raw
            .into_iter()
            .zip(tags)
            .enumerate()
            .map(|(i, (tok, pos))| {
                let lower = tok.text.to_lowercase();
                Token {
                    index: i,
                    lemma: lemmatize(&lower, pos),
                    is_stop: lexicon::is_stop(&lower),
                    lower,
                    text: tok.text,
                    pos,
                    dep: Dep::Dep,
                    head: i,
                    start: tok.start,
                    end: tok.end,
                }
            })
            .collect();

        parser::parse(&mut tokens);
        let entities = ner::recognize(text, &tokens);
        trace!(
            sentence = index,
            tokens = tokens.len(),
            entities = entities.len(),
            "Annotated sentence"
        );

        Sentence::new(index, text, tokens, entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_phrase_includes_modifiers() {
        let sent = Pipeline::new().parse_sentence(0, "The domestic dog eats meat.");
        let dog = sent.tokens.iter().find(|t| t.text == "dog").unwrap();
        assert_eq!(sent.full_phrase(dog.index), "The domestic dog");
    }

    #[test]
    fn test_root_subtree_covers_sentence() {
        let text = "The old farmer in the small village near the river sold the fat cattle \
                    to the butcher from the town on the hill.";
        let sent = Pipeline::new().parse_sentence(0, text);
        let root = sent.root().unwrap().index;
        let all: Vec<usize> = (0..sent.tokens.len()).collect();
        assert_eq!(sent.subtree(root), all);

        for token in &sent.tokens {
            let expected: Vec<usize> = sent
                .tokens
                .iter()
                .filter(|t| t.head == token.index && t.index != token.index)
                .map(|t| t.index)
                .collect();
            let children: Vec<usize> = sent.children(token.index).map(|t| t.index).collect();
            assert_eq!(children, expected);
        }
    }

    #[test]
    fn test_subtree_out_of_range() {
        let sent = Pipeline::new().parse_sentence(0, "Dogs bark.");
        assert!(sent.subtree(sent.tokens.len()).is_empty());
        assert_eq!(sent.children(99).count(), 0);
    }

    #[test]
    fn test_single_root() {
        let sent = Pipeline::new().parse_sentence(0, "Cattle are large domesticated mammals.");
        let roots = sent.tokens.iter().filter(|t| t.dep == Dep::Root).count();
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_parse_splits_sentences() {
        let sents = Pipeline::new().parse("Dogs bark. Cats meow.");
        assert_eq!(sents.len(), 2);
        assert_eq!(sents[1].index, 1);
        assert_eq!(sents[1].text, "Cats meow.");
    }

    #[test]
    fn test_empty_text() {
        assert!(Pipeline::new().parse("").is_empty());
        assert!(Pipeline::new().parse("   \n ").is_empty());
    }
}
