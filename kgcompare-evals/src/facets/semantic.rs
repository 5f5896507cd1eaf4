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

//! Sentence-embedding similarity between triple sets

use super::{PERCENT_DECIMALS, SIMILARITY_DECIMALS};
use crate::report::SemanticSimilarity;
use kgcompare_core::{percentage, round_to, Triple};
use kgcompare_embeddings::{pairwise_cosine, summarize, EmbeddingBackend};
use tracing::{debug, warn};

pub const EMPTY_INPUT_METHOD: &str = "none (empty input)";

/// Embed `subject predicate object` for every triple of both sides in one
/// batch and summarize the A x B cosine matrix
pub fn semantic_similarity(
    a: &[Triple],
    b: &[Triple],
    backend: &dyn EmbeddingBackend,
    threshold: f64,
) -> SemanticSimilarity {
    if a.is_empty() || b.is_empty() {
        return SemanticSimilarity {
            method: EMPTY_INPUT_METHOD.to_string(),
            ..Default::default()
        };
    }

    let texts: Vec<String> = a.iter().chain(b).map(Triple::embedding_text).collect();
    let batch = match backend.embed(&texts) {
        Ok(batch) if batch.vectors.len() == texts.len() => batch,
        Ok(batch) => {
            warn!(
                expected = texts.len(),
                actual = batch.vectors.len(),
                "Embedding batch size mismatch"
            );
            return zeroed(backend);
        }
        Err(e) => {
            warn!(error = %e, "Semantic similarity unavailable");
            return zeroed(backend);
        }
    };

    let (va, vb) = batch.vectors.split_at(a.len());
    let stats = summarize(&pairwise_cosine(va, vb), threshold);
    debug!(
        method = %batch.method,
        pairs = stats.pairs,
        similar = stats.above_threshold,
        "Computed semantic similarity"
    );

    SemanticSimilarity {
        average_similarity: round_to(stats.mean, SIMILARITY_DECIMALS),
        max_similarity: round_to(stats.max, SIMILARITY_DECIMALS),
        similar_pairs_count: stats.above_threshold,
        similar_pairs_percentage: round_to(
            percentage(stats.above_threshold, stats.pairs),
            PERCENT_DECIMALS,
        ),
        method: batch.method.as_str().to_string(),
    }
}

fn zeroed(backend: &dyn EmbeddingBackend) -> SemanticSimilarity {
    SemanticSimilarity {
        method: backend.method().as_str().to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::{a, b};
    use kgcompare_embeddings::FallbackBackend;

    #[test]
    fn test_tfidf_similarity() {
        let backend = FallbackBackend::tfidf_only();
        let side_a = vec![a("cattle", "be", "herbivore"), a("dog", "eat", "meat")];
        let side_b = vec![b("cattle", "be", "herbivore")];
        let report = semantic_similarity(&side_a, &side_b, &backend, 0.7);

        assert_eq!(report.method, "tf-idf");
        assert_eq!(report.max_similarity, 1.0);
        assert_eq!(report.similar_pairs_count, 1);
        assert_eq!(report.similar_pairs_percentage, 50.0);
        assert!(report.average_similarity > 0.0 && report.average_similarity < 1.0);
    }

    #[test]
    fn test_empty_side() {
        let backend = FallbackBackend::tfidf_only();
        let report = semantic_similarity(&[], &[b("x", "y", "z")], &backend, 0.7);
        assert_eq!(report.method, EMPTY_INPUT_METHOD);
        assert_eq!(report.average_similarity, 0.0);
        assert_eq!(report.similar_pairs_count, 0);
    }

    #[test]
    fn test_termless_triples_degrade_to_zero() {
        let backend = FallbackBackend::tfidf_only();
        let report = semantic_similarity(&[a("a", "b", "c")], &[b("d", "e", "f")], &backend, 0.7);
        assert_eq!(report.method, "tf-idf");
        assert_eq!(report.max_similarity, 0.0);
    }
}
