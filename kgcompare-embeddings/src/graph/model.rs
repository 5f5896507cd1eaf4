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

//! Knowledge-graph embedding model

use super::scoring::{scoring_function, ScoringFunction};
use crate::error::GraphEmbeddingError;
use kgcompare_core::{Triple, Vocabulary};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Standard deviation of the initial entity and relation tables
pub const INITIAL_STD: f32 = 0.1;

/// Table of `shape.0` rows drawn i.i.d. from `N(0, std)`, row-major
pub(crate) fn random_table(
    shape: (usize, usize),
    std: f32,
    rng: &mut StdRng,
) -> Result<Array2<f32>, GraphEmbeddingError> {
    let normal =
        Normal::new(0.0f32, std).map_err(|e| GraphEmbeddingError::Distribution(e.to_string()))?;
    Ok(Array2::from_shape_fn(shape, |_| normal.sample(&mut *rng)))
}

/// Entity and relation vectors for one comparison run.
///
/// Entities are every distinct subject and object, relations every
/// distinct predicate, both keyed by their verbatim text with ids assigned
/// in first-seen order. Tables are drawn from a seeded normal distribution
/// and conditioned by the [`ScoringFunction`]; fitting the same triples
/// with the same seed always gives the same vectors.
pub struct GraphEmbeddingModel {
    scoring: Box<dyn ScoringFunction>,
    dimension: usize,
    seed: u64,
    entities: Vocabulary,
    relations: Vocabulary,
    entity_table: Array2<f32>,
    relation_table: Array2<f32>,
}

impl std::fmt::Debug for GraphEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphEmbeddingModel")
            .field("scoring", &self.scoring.name())
            .field("dimension", &self.dimension)
            .field("entities", &self.entities.len())
            .field("relations", &self.relations.len())
            .finish()
    }
}

impl GraphEmbeddingModel {
    pub fn new(scoring: Box<dyn ScoringFunction>, dimension: usize, seed: u64) -> Self {
        Self {
            scoring,
            dimension,
            seed,
            entities: Vocabulary::new(),
            relations: Vocabulary::new(),
            entity_table: Array2::zeros((0, dimension)),
            relation_table: Array2::zeros((0, dimension)),
        }
    }

    /// Model for a named variant (`TransE`, `DistMult`, `ComplEx`)
    pub fn variant(name: &str, dimension: usize, seed: u64) -> Result<Self, GraphEmbeddingError> {
        Ok(Self::new(scoring_function(name)?, dimension, seed))
    }

    /// Build vocabularies over `triples` and initialize the tables.
    /// Refitting discards the previous state.
    pub fn fit(&mut self, triples: &[Triple]) -> Result<(), GraphEmbeddingError> {
        self.entities = Vocabulary::new();
        self.relations = Vocabulary::new();
        for triple in triples {
            self.entities.intern(&triple.subject);
            self.entities.intern(&triple.object);
            self.relations.intern(&triple.predicate);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut entity_table =
            random_table((self.entities.len(), self.dimension), INITIAL_STD, &mut rng)?;
        let mut relation_table =
            random_table((self.relations.len(), self.dimension), INITIAL_STD, &mut rng)?;
        self.scoring
            .initialize(&mut entity_table, &mut relation_table, &mut rng)?;
        self.entity_table = entity_table;
        self.relation_table = relation_table;

        debug!(
            variant = self.scoring.name(),
            entities = self.entities.len(),
            relations = self.relations.len(),
            dimension = self.dimension,
            "Fitted graph embeddings"
        );
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.scoring.name()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Vector of `name`, or zeros when it was never seen
    pub fn entity_vector(&self, name: &str) -> Array1<f32> {
        match self.entities.get(name) {
            Some(id) => self.entity_table.row(id as usize).to_owned(),
            None => Array1::zeros(self.dimension),
        }
    }

    /// Vector of `name`, or zeros when it was never seen
    pub fn relation_vector(&self, name: &str) -> Array1<f32> {
        match self.relations.get(name) {
            Some(id) => self.relation_table.row(id as usize).to_owned(),
            None => Array1::zeros(self.dimension),
        }
    }

    pub fn triple_vector(&self, triple: &Triple) -> Array1<f32> {
        let head = self.entity_vector(&triple.subject);
        let relation = self.relation_vector(&triple.predicate);
        let tail = self.entity_vector(&triple.object);
        self.scoring
            .compose(head.view(), relation.view(), tail.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgcompare_core::{ExtractionMethod, SourceTag};

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(s, p, o, SourceTag::A, ExtractionMethod::Dependency)
    }

    fn sample() -> Vec<Triple> {
        vec![
            triple("cattle", "be", "herbivore"),
            triple("dog", "eat", "meat"),
            triple("cattle", "eat", "grass"),
        ]
    }

    #[test]
    fn test_vocabulary_counts() {
        let mut model = GraphEmbeddingModel::variant("TransE", 50, 42).unwrap();
        model.fit(&sample()).unwrap();
        assert_eq!(model.entity_count(), 5);
        assert_eq!(model.relation_count(), 2);
        assert_eq!(model.entity_vector("cattle").len(), 50);
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = GraphEmbeddingModel::variant("DistMult", 16, 42).unwrap();
        let mut b = GraphEmbeddingModel::variant("DistMult", 16, 42).unwrap();
        a.fit(&sample()).unwrap();
        b.fit(&sample()).unwrap();
        assert_eq!(a.triple_vector(&sample()[0]), b.triple_vector(&sample()[0]));

        let mut c = GraphEmbeddingModel::variant("DistMult", 16, 7).unwrap();
        c.fit(&sample()).unwrap();
        assert_ne!(a.entity_vector("dog"), c.entity_vector("dog"));
    }

    #[test]
    fn test_unknown_names_are_zero() {
        let mut model = GraphEmbeddingModel::variant("ComplEx", 8, 42).unwrap();
        model.fit(&sample()).unwrap();
        assert!(model.entity_vector("wolf").iter().all(|v| *v == 0.0));
        assert!(model.relation_vector("hunt").iter().all(|v| *v == 0.0));
        let unseen = triple("wolf", "hunt", "deer");
        assert!(model.triple_vector(&unseen).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_transe_entities_unit_norm() {
        let mut model = GraphEmbeddingModel::variant("TransE", 50, 42).unwrap();
        model.fit(&sample()).unwrap();
        let v = model.entity_vector("meat");
        assert!((v.dot(&v).sqrt() - 1.0).abs() < 1e-4);
        let t = model.triple_vector(&sample()[1]);
        assert_eq!(t, &model.entity_vector("dog") + &model.relation_vector("eat"));
    }

    #[test]
    fn test_fit_empty() {
        let mut model = GraphEmbeddingModel::variant("TransE", 4, 42).unwrap();
        model.fit(&[]).unwrap();
        assert_eq!(model.entity_count(), 0);
        assert_eq!(model.relation_count(), 0);
    }
}
