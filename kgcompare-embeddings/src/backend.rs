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

//! Embedding backend abstraction
//!
//! Backends turn a batch of strings into vectors. A batch is the unit of
//! comparability: the TF-IDF backend fits its vocabulary on the batch, so
//! vectors from different `embed` calls must not be compared.

use crate::error::Result;
use ndarray::Array1;
use std::fmt;

/// Family of encoder that produced a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddingMethod {
    SentenceTransformer,
    TfIdf,
}

impl EmbeddingMethod {
    /// Label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbeddingMethod::SentenceTransformer => "sentence-transformers",
            EmbeddingMethod::TfIdf => "tf-idf",
        }
    }
}

impl fmt::Display for EmbeddingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse vector with strictly increasing indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build from `(index, value)` pairs; duplicate indices are summed and
    /// zeros dropped
    pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_unstable_by_key(|(i, _)| *i);
        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f32> = Vec::with_capacity(pairs.len());
        for (i, v) in pairs {
            match indices.last() {
                Some(&last) if last == i => {
                    if let Some(acc) = values.last_mut() {
                        *acc += v;
                    }
                }
                _ => {
                    indices.push(i);
                    values.push(v);
                }
            }
        }
        let (indices, values) = indices
            .into_iter()
            .zip(values)
            .filter(|(_, v)| *v != 0.0)
            .unzip();
        Self { indices, values }
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit L2 norm; the zero vector is left unchanged
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            self.values.iter_mut().for_each(|v| *v /= norm);
        }
        self
    }
}

/// One embedded string
#[derive(Debug, Clone, PartialEq)]
pub enum Embedding {
    Dense(Array1<f32>),
    Sparse(SparseVector),
}

impl Embedding {
    pub fn norm(&self) -> f32 {
        match self {
            Embedding::Dense(v) => v.dot(v).sqrt(),
            Embedding::Sparse(v) => v.norm(),
        }
    }
}

/// Vectors for one input batch, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingBatch {
    pub method: EmbeddingMethod,
    pub vectors: Vec<Embedding>,
}

/// Text vectorization service
pub trait EmbeddingBackend: Send + Sync {
    /// Encoder family this backend reports when it succeeds
    fn method(&self) -> EmbeddingMethod;

    /// Embed every string in `texts`. Implementations return exactly one
    /// vector per input.
    fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_from_pairs() {
        let v = SparseVector::from_pairs(vec![(3, 1.0), (1, 2.0), (3, 1.0), (5, 0.0)]);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(1, 2.0), (3, 2.0)]);
        assert_eq!(v.nnz(), 2);
    }

    #[test]
    fn test_sparse_dot_and_norm() {
        let a = SparseVector::from_pairs(vec![(0, 3.0), (2, 4.0)]);
        let b = SparseVector::from_pairs(vec![(2, 1.0), (7, 9.0)]);
        assert_eq!(a.dot(&b), 4.0);
        assert_eq!(a.norm(), 5.0);
        assert!((a.normalized().norm() - 1.0).abs() < 1e-6);
        assert!(SparseVector::default().normalized().is_empty());
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(EmbeddingMethod::TfIdf.as_str(), "tf-idf");
        assert_eq!(
            EmbeddingMethod::SentenceTransformer.to_string(),
            "sentence-transformers"
        );
    }
}
