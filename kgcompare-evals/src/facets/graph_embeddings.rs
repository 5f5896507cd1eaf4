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

//! Graph-embedding similarity per scoring variant

use super::SIMILARITY_DECIMALS;
use crate::report::GraphEmbeddingScore;
use kgcompare_core::{round_to, GraphConfig, Triple};
use kgcompare_embeddings::{
    pairwise_cosine_dense, summarize, GraphEmbeddingError, GraphEmbeddingModel,
};
use ndarray::Array1;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Fit every configured variant on the union of both sides and compare
/// the leading triples of each side. A failing variant is reported with an
/// `error` entry and does not affect the others.
pub fn graph_embeddings(
    a: &[Triple],
    b: &[Triple],
    config: &GraphConfig,
) -> BTreeMap<String, GraphEmbeddingScore> {
    config
        .variants
        .iter()
        .map(|variant| {
            let score = match score_variant(variant, a, b, config) {
                Ok(score) => score,
                Err(e) => {
                    warn!(variant = %variant, error = %e, "Graph embedding variant failed");
                    GraphEmbeddingScore::failed(e.to_string())
                }
            };
            (variant.clone(), score)
        })
        .collect()
}

fn score_variant(
    variant: &str,
    a: &[Triple],
    b: &[Triple],
    config: &GraphConfig,
) -> Result<GraphEmbeddingScore, GraphEmbeddingError> {
    let mut model = GraphEmbeddingModel::variant(variant, config.dimension, config.seed)?;
    if a.is_empty() || b.is_empty() {
        return Err(GraphEmbeddingError::EmptyTriples);
    }

    let all: Vec<Triple> = a.iter().chain(b).cloned().collect();
    model.fit(&all)?;

    let vectors = |side: &[Triple]| -> Vec<Array1<f32>> {
        side.iter()
            .take(config.max_triples_per_side)
            .map(|t| model.triple_vector(t))
            .collect()
    };
    let va = vectors(a);
    let vb = vectors(b);
    if va.is_empty() || vb.is_empty() {
        return Err(GraphEmbeddingError::NoEmbeddings);
    }

    let stats = summarize(&pairwise_cosine_dense(&va, &vb), f64::INFINITY);
    debug!(
        variant,
        entities = model.entity_count(),
        relations = model.relation_count(),
        mean = stats.mean,
        "Scored graph embeddings"
    );
    Ok(GraphEmbeddingScore {
        average_similarity: round_to(stats.mean, SIMILARITY_DECIMALS),
        max_similarity: round_to(stats.max, SIMILARITY_DECIMALS),
        entity_count: model.entity_count(),
        relation_count: model.relation_count(),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::{a, b};

    #[test]
    fn test_all_variants_reported() {
        let side_a = vec![a("cattle", "be", "herbivore")];
        let side_b = vec![b("cattle", "be", "herbivore"), b("dog", "eat", "meat")];
        let report = graph_embeddings(&side_a, &side_b, &GraphConfig::default());

        assert_eq!(report.len(), 3);
        for (name, score) in &report {
            assert!(score.error.is_none(), "{}", name);
            assert_eq!(score.entity_count, 4);
            assert_eq!(score.relation_count, 2);
            assert_eq!(score.max_similarity, 1.0);
            assert!(score.average_similarity >= -1.0 && score.average_similarity <= 1.0);
        }
    }

    #[test]
    fn test_empty_side_is_error_entry() {
        let report = graph_embeddings(&[], &[b("x", "y", "z")], &GraphConfig::default());
        for score in report.values() {
            assert_eq!(score.error.as_deref(), Some("Empty triple sets"));
            assert_eq!(score.entity_count, 0);
        }
    }

    #[test]
    fn test_lowercase_variant_from_config() {
        let mut config = kgcompare_core::AnalyzerConfig::default();
        config.graph.variants = vec!["transe".to_string()];
        assert!(config.validate().is_ok());

        let side_a = vec![a("cattle", "be", "herbivore")];
        let side_b = vec![b("cattle", "be", "herbivore")];
        let report = graph_embeddings(&side_a, &side_b, &config.graph);
        assert!(report["transe"].error.is_none());
        assert_eq!(report["transe"].max_similarity, 1.0);

        config.canonicalize();
        let report = graph_embeddings(&side_a, &side_b, &config.graph);
        assert!(report["TransE"].error.is_none());
    }

    #[test]
    fn test_unknown_variant_isolated() {
        let config = GraphConfig {
            variants: vec!["TransE".to_string(), "RotatE".to_string()],
            ..Default::default()
        };
        let report = graph_embeddings(&[a("x", "y", "z")], &[b("x", "y", "z")], &config);
        assert!(report["TransE"].error.is_none());
        assert!(report["RotatE"].error.is_some());
    }

    #[test]
    fn test_per_side_cap() {
        let side_a: Vec<_> = (0..5).map(|i| a(&format!("e{}", i), "r", "o")).collect();
        let side_b = vec![b("e0", "r", "o")];
        let config = GraphConfig {
            max_triples_per_side: 2,
            ..Default::default()
        };
        let report = graph_embeddings(&side_a, &side_b, &config);
        // vocabulary still covers every triple
        assert_eq!(report["DistMult"].entity_count, 6);
    }
}
