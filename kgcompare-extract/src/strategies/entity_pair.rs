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

//! Relations read from the words between two named entities

use super::{Candidate, ExtractionStrategy};
use crate::error::Result;
use crate::nlp::Sentence;
use kgcompare_core::ExtractionMethod;

/// For each ordered pair of entities in a sentence, the lemmas of the
/// content words strictly between them form the predicate
#[derive(Debug, Clone)]
pub struct EntityPairStrategy {
    min_gap: usize,
    max_gap: usize,
}

impl Default for EntityPairStrategy {
    fn default() -> Self {
        Self::new(1, 9)
    }
}

impl EntityPairStrategy {
    /// Gaps are counted in tokens strictly between the two spans
    pub fn new(min_gap: usize, max_gap: usize) -> Self {
        Self { min_gap, max_gap }
    }
}

impl ExtractionStrategy for EntityPairStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::EntityPair
    }

    fn extract(&self, sentence: &Sentence) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        let entities = &sentence.entities;

        for (i, first) in entities.iter().enumerate() {
            for second in &entities[i + 1..] {
                if second.start <= first.end {
                    continue;
                }
                let gap = second.start - first.end;
                if gap < self.min_gap || gap > self.max_gap {
                    continue;
                }

                let predicate = sentence.tokens[first.end..second.start]
                    .iter()
                    .filter(|t| !t.is_stop && !t.is_punct())
                    .map(|t| t.lemma.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                if predicate.is_empty() {
                    continue;
                }

                candidates.push(
                    Candidate::new(first.text.clone(), predicate, second.text.clone())
                        .with_types(first.label, second.label),
                );
            }
        }

        Ok(candidates)
    }
}
