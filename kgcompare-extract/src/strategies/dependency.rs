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

//! Subject / verb / object triples read off the dependency tree

use super::{Candidate, ExtractionStrategy};
use crate::error::Result;
use crate::nlp::{Dep, Sentence};
use kgcompare_core::ExtractionMethod;

/// For every nominal subject, pairs the phrase it heads with the lemma of
/// its governing verb and each object of that verb. Objects are the verb's
/// direct `dobj`/`attr` dependents and the `pobj` of any `prep` attached to
/// the verb, so "Paris is located in France" yields (Paris, locate, France).
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyStrategy;

impl DependencyStrategy {
    /// `dobj`/`attr` children of the verb together with the `pobj`
    /// children of its `prep` dependents, in sentence order
    fn objects(sentence: &Sentence, verb: usize) -> Vec<usize> {
        let mut objects = Vec::new();
        for child in sentence.children(verb) {
            match child.dep {
                Dep::Dobj | Dep::Attr => objects.push(child.index),
                Dep::Prep => objects.extend(
                    sentence
                        .children(child.index)
                        .filter(|t| t.dep == Dep::Pobj)
                        .map(|t| t.index),
                ),
                _ => {}
            }
        }
        objects
    }
}

impl ExtractionStrategy for DependencyStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Dependency
    }

    fn extract(&self, sentence: &Sentence) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for token in sentence.tokens.iter().filter(|t| t.dep.is_subject()) {
            let verb = &sentence.tokens[token.head];
            if verb.index == token.index {
                continue;
            }
            let subject = sentence.full_phrase(token.index);
            for object in Self::objects(sentence, verb.index) {
                let object = sentence.full_phrase(object);
                if subject.is_empty() || object.is_empty() {
                    continue;
                }
                candidates.push(Candidate::new(subject.clone(), verb.lemma.clone(), object));
            }
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Pipeline;

    fn run(text: &str) -> Vec<(String, String, String)> {
        let sentence = Pipeline::new().parse_sentence(0, text);
        DependencyStrategy
            .extract(&sentence)
            .unwrap()
            .into_iter()
            .map(|c| (c.subject, c.predicate, c.object))
            .collect()
    }

    #[test]
    fn test_transitive_clause() {
        assert_eq!(
            run("The domestic dog eats meat."),
            vec![(
                "The domestic dog".to_string(),
                "eat".to_string(),
                "meat".to_string()
            )]
        );
    }

    #[test]
    fn test_copula_attribute() {
        assert_eq!(
            run("Cattle are herbivores."),
            vec![(
                "Cattle".to_string(),
                "be".to_string(),
                "herbivores".to_string()
            )]
        );
    }

    #[test]
    fn test_object_through_preposition() {
        assert_eq!(
            run("Paris is located in France."),
            vec![(
                "Paris".to_string(),
                "locate".to_string(),
                "France".to_string()
            )]
        );
    }

    #[test]
    fn test_intransitive_yields_nothing() {
        assert!(run("Dogs bark.").is_empty());
    }
}
