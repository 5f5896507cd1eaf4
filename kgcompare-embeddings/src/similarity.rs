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

//! Cosine similarity over embeddings

use crate::backend::Embedding;
use ndarray::{Array1, Array2, ArrayView1};

/// Cosine similarity of two dense vectors. Mismatched lengths and
/// zero-norm inputs give 0.
pub fn cosine_dense(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();
    if norm_a < 1e-10 || norm_b < 1e-10 {
        return 0.0;
    }
    (a.dot(&b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Cosine similarity of two embeddings of the same kind; mixed kinds give 0
pub fn cosine(a: &Embedding, b: &Embedding) -> f32 {
    match (a, b) {
        (Embedding::Dense(a), Embedding::Dense(b)) => cosine_dense(a.view(), b.view()),
        (Embedding::Sparse(a), Embedding::Sparse(b)) => {
            let norm = a.norm() * b.norm();
            if norm < 1e-10 {
                0.0
            } else {
                (a.dot(b) / norm).clamp(-1.0, 1.0)
            }
        }
        _ => 0.0,
    }
}

/// `a.len() x b.len()` matrix of cosine similarities
pub fn pairwise_cosine(a: &[Embedding], b: &[Embedding]) -> Array2<f32> {
    Array2::from_shape_fn((a.len(), b.len()), |(i, j)| cosine(&a[i], &b[j]))
}

/// Dense counterpart of [`pairwise_cosine`]
pub fn pairwise_cosine_dense(a: &[Array1<f32>], b: &[Array1<f32>]) -> Array2<f32> {
    Array2::from_shape_fn((a.len(), b.len()), |(i, j)| {
        cosine_dense(a[i].view(), b[j].view())
    })
}

/// Summary of a similarity matrix
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimilarityStats {
    pub mean: f64,
    pub max: f64,
    /// Entries strictly above the threshold
    pub above_threshold: usize,
    pub pairs: usize,
}

/// Mean, max and above-threshold count; an empty matrix yields zeros
pub fn summarize(matrix: &Array2<f32>, threshold: f64) -> SimilarityStats {
    if matrix.is_empty() {
        return SimilarityStats::default();
    }
    let mut sum = 0.0f64;
    let mut max = f64::NEG_INFINITY;
    let mut above = 0;
    for &value in matrix.iter() {
        let value = value as f64;
        sum += value;
        max = max.max(value);
        if value > threshold {
            above += 1;
        }
    }
    SimilarityStats {
        mean: sum / matrix.len() as f64,
        max,
        above_threshold: above,
        pairs: matrix.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SparseVector;
    use ndarray::array;

    #[test]
    fn test_cosine_dense() {
        let a = array![1.0f32, 0.0];
        let b = array![0.0f32, 2.0];
        assert_eq!(cosine_dense(a.view(), a.view()), 1.0);
        assert_eq!(cosine_dense(a.view(), b.view()), 0.0);
        assert_eq!(cosine_dense(a.view(), (-&a).view()), -1.0);
        assert_eq!(cosine_dense(a.view(), array![0.0f32, 0.0].view()), 0.0);
        assert_eq!(cosine_dense(a.view(), array![1.0f32].view()), 0.0);
    }

    #[test]
    fn test_cosine_mixed_kinds() {
        let dense = Embedding::Dense(array![1.0f32, 0.0]);
        let sparse = Embedding::Sparse(SparseVector::from_pairs(vec![(0, 1.0)]));
        assert_eq!(cosine(&dense, &sparse), 0.0);
        assert!((cosine(&sparse, &sparse) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pairwise_and_summary() {
        let a = vec![array![1.0f32, 0.0], array![0.0f32, 1.0]];
        let b = vec![array![1.0f32, 0.0]];
        let m = pairwise_cosine_dense(&a, &b);
        assert_eq!(m.dim(), (2, 1));

        let stats = summarize(&m, 0.7);
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.max, 1.0);
        assert_eq!(stats.above_threshold, 1);
        assert_eq!(stats.pairs, 2);

        assert_eq!(summarize(&Array2::zeros((0, 3)), 0.7), SimilarityStats::default());
    }
}
