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

//! Extraction strategies
//!
//! Each strategy turns one parsed [`Sentence`] into candidate
//! (subject, predicate, object) assertions. Strategies are independent and
//! never see each other's output; [`crate::TripleExtractor`] runs the
//! configured set in order and concatenates the results, so the same fact
//! may appear once per strategy.

mod dependency;
mod entity_pair;
mod nominal;
mod surface;

pub use dependency::DependencyStrategy;
pub use entity_pair::EntityPairStrategy;
pub use nominal::NominalStrategy;
pub use surface::SurfacePatternStrategy;

use crate::error::Result;
use crate::nlp::Sentence;
use kgcompare_core::{EntityLabel, ExtractionMethod};

/// A raw assertion produced by a strategy, before it is tagged with its
/// source, sentence and citation flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub subject_type: Option<EntityLabel>,
    pub object_type: Option<EntityLabel>,
}

impl Candidate {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            subject_type: None,
            object_type: None,
        }
    }

    pub fn with_types(mut self, subject_type: EntityLabel, object_type: EntityLabel) -> Self {
        self.subject_type = Some(subject_type);
        self.object_type = Some(object_type);
        self
    }
}

/// One way of mining assertions out of a parsed sentence
pub trait ExtractionStrategy: Send + Sync {
    /// Method tag stamped on every triple this strategy yields
    fn method(&self) -> ExtractionMethod;

    /// Candidates found in `sentence`. An `Err` drops this sentence for this
    /// strategy only.
    fn extract(&self, sentence: &Sentence) -> Result<Vec<Candidate>>;
}

/// Entity-pair span bounds, in tokens strictly between the two entities
#[derive(Debug, Clone, Copy)]
pub struct EntityGap {
    pub min: usize,
    pub max: usize,
}

impl Default for EntityGap {
    fn default() -> Self {
        Self { min: 1, max: 9 }
    }
}

/// Build the strategy for `method`
pub fn build_strategy(
    method: ExtractionMethod,
    gap: EntityGap,
) -> Result<Box<dyn ExtractionStrategy>> {
    Ok(match method {
        ExtractionMethod::Dependency => Box::new(DependencyStrategy),
        ExtractionMethod::SurfacePattern => Box::new(SurfacePatternStrategy::new()?),
        ExtractionMethod::EntityPair => Box::new(EntityPairStrategy::new(gap.min, gap.max)),
        ExtractionMethod::Nominal => Box::new(NominalStrategy),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_strategy_tags() {
        for method in ExtractionMethod::ALL {
            let strategy = build_strategy(method, EntityGap::default()).unwrap();
            assert_eq!(strategy.method(), method);
        }
    }
}
