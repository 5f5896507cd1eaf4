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

//! Scoring functions for knowledge-graph embeddings
//!
//! A scoring function decides two things: how the freshly drawn entity and
//! relation tables are conditioned after initialization, and how a
//! `(head, relation, tail)` triple is composed into one vector.
//!
//! | Variant  | Conditioning                         | Triple vector |
//! |----------|--------------------------------------|---------------|
//! | TransE   | rows L2-normalized                   | `h + r`       |
//! | DistMult | relations redrawn from N(0, 0.05)    | `h ⊙ r ⊙ t`   |
//! | ComplEx  | relations redrawn from N(0, 0.05)    | `h ⊙ r`       |
//!
//! ComplEx is the real-valued simplification. None of the variants is
//! trained against a margin loss; a trained implementation can be plugged
//! in through [`ScoringFunction`] without touching callers.

use super::model::random_table;
use crate::error::GraphEmbeddingError;
use kgcompare_core::canonical_graph_variant;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::rngs::StdRng;

/// Standard deviation for redrawn bilinear relation tables
pub const BILINEAR_RELATION_STD: f32 = 0.05;

const NORM_EPSILON: f32 = 1e-8;

pub trait ScoringFunction: Send + Sync {
    /// Variant name as reported (`TransE`, `DistMult`, `ComplEx`)
    fn name(&self) -> &'static str;

    /// Condition the initial tables. `rng` continues the stream that drew
    /// them.
    fn initialize(
        &self,
        entities: &mut Array2<f32>,
        relations: &mut Array2<f32>,
        rng: &mut StdRng,
    ) -> Result<(), GraphEmbeddingError>;

    /// Vector for one triple
    fn compose(
        &self,
        head: ArrayView1<f32>,
        relation: ArrayView1<f32>,
        tail: ArrayView1<f32>,
    ) -> Array1<f32>;
}

/// Scale every row to unit L2 norm (plus a small epsilon)
fn normalize_rows(table: &mut Array2<f32>) {
    for mut row in table.axis_iter_mut(Axis(0)) {
        let norm = row.dot(&row).sqrt();
        row.mapv_inplace(|v| v / (norm + NORM_EPSILON));
    }
}

/// Translational: `h + r ≈ t`
#[derive(Debug, Clone, Copy, Default)]
pub struct TransE;

impl ScoringFunction for TransE {
    fn name(&self) -> &'static str {
        "TransE"
    }

    fn initialize(
        &self,
        entities: &mut Array2<f32>,
        relations: &mut Array2<f32>,
        _rng: &mut StdRng,
    ) -> Result<(), GraphEmbeddingError> {
        normalize_rows(entities);
        normalize_rows(relations);
        Ok(())
    }

    fn compose(
        &self,
        head: ArrayView1<f32>,
        relation: ArrayView1<f32>,
        _tail: ArrayView1<f32>,
    ) -> Array1<f32> {
        &head + &relation
    }
}

/// Bilinear-diagonal: `<h, r, t>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DistMult;

impl ScoringFunction for DistMult {
    fn name(&self) -> &'static str {
        "DistMult"
    }

    fn initialize(
        &self,
        _entities: &mut Array2<f32>,
        relations: &mut Array2<f32>,
        rng: &mut StdRng,
    ) -> Result<(), GraphEmbeddingError> {
        *relations = random_table(relations.dim(), BILINEAR_RELATION_STD, rng)?;
        Ok(())
    }

    fn compose(
        &self,
        head: ArrayView1<f32>,
        relation: ArrayView1<f32>,
        tail: ArrayView1<f32>,
    ) -> Array1<f32> {
        &(&head * &relation) * &tail
    }
}

/// Complex-bilinear, real-valued
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplEx;

impl ScoringFunction for ComplEx {
    fn name(&self) -> &'static str {
        "ComplEx"
    }

    fn initialize(
        &self,
        _entities: &mut Array2<f32>,
        relations: &mut Array2<f32>,
        rng: &mut StdRng,
    ) -> Result<(), GraphEmbeddingError> {
        *relations = random_table(relations.dim(), BILINEAR_RELATION_STD, rng)?;
        Ok(())
    }

    fn compose(
        &self,
        head: ArrayView1<f32>,
        relation: ArrayView1<f32>,
        _tail: ArrayView1<f32>,
    ) -> Array1<f32> {
        &head * &relation
    }
}

/// Scoring function by variant name, matched case-insensitively
pub fn scoring_function(name: &str) -> Result<Box<dyn ScoringFunction>, GraphEmbeddingError> {
    match canonical_graph_variant(name) {
        Some("TransE") => Ok(Box::new(TransE)),
        Some("DistMult") => Ok(Box::new(DistMult)),
        Some("ComplEx") => Ok(Box::new(ComplEx)),
        _ => Err(GraphEmbeddingError::UnknownVariant(name.to_string())),
    }
}
