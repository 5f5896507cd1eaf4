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

//! "X of Y" part-whole relations

use super::{Candidate, ExtractionStrategy};
use crate::error::Result;
use crate::nlp::{Dep, Sentence};
use kgcompare_core::ExtractionMethod;

pub const HAS_PART: &str = "has_part";

/// Emits `(governor, has_part, object)` for every object of an `of`
/// preposition, where the governor is whatever the preposition attaches to
#[derive(Debug, Clone, Copy, Default)]
pub struct NominalStrategy;

impl ExtractionStrategy for NominalStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Nominal
    }

    fn extract(&self, sentence: &Sentence) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for token in sentence.tokens.iter().filter(|t| t.dep == Dep::Pobj) {
            let prep = &sentence.tokens[token.head];
            if prep.lower != "of" || prep.head == prep.index {
                continue;
            }
            let governor = prep.head;
            if governor == token.index {
                continue;
            }
            candidates.push(Candidate::new(
                sentence.full_phrase(governor),
                HAS_PART,
                sentence.full_phrase(token.index),
            ));
        }

        Ok(candidates)
    }
}
