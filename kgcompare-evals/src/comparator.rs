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

//! Knowledge-graph comparison of two triple sets
//!
//! [`GraphComparator`] runs every facet over the same pair of triple
//! lists and assembles a [`ComparisonReport`]. Facets never fail: empty
//! input and backend failures produce zeroed sections.

use crate::facets::{
    basic_stats, detect_contradictions, entity_coherence, graph_density, graph_embeddings,
    provenance_analysis, semantic_similarity, triple_overlap, CoherenceLimits,
};
use crate::report::ComparisonReport;
use kgcompare_core::{AnalyzerConfig, GraphConfig, Triple};
use kgcompare_embeddings::{EmbeddingBackend, FallbackBackend};
use std::time::Instant;
use tracing::{debug, info};

/// Comparison parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ComparatorConfig {
    /// Cosine similarity above which a triple pair counts as similar
    pub similarity_threshold: f64,
    pub graph: GraphConfig,
    pub max_inconsistent_examples: usize,
    pub max_example_relations: usize,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        let limits = CoherenceLimits::default();
        Self {
            similarity_threshold: 0.7,
            graph: GraphConfig::default(),
            max_inconsistent_examples: limits.max_examples,
            max_example_relations: limits.max_relations,
        }
    }
}

impl From<&AnalyzerConfig> for ComparatorConfig {
    fn from(config: &AnalyzerConfig) -> Self {
        Self {
            similarity_threshold: config.embeddings.similarity_threshold,
            graph: config.graph.clone(),
            max_inconsistent_examples: config.report.max_inconsistent_examples,
            max_example_relations: config.report.max_example_relations,
        }
    }
}

impl ComparatorConfig {
    fn limits(&self) -> CoherenceLimits {
        CoherenceLimits {
            max_examples: self.max_inconsistent_examples,
            max_relations: self.max_example_relations,
        }
    }
}

/// Runs all comparison facets with one embedding backend
pub struct GraphComparator {
    backend: Box<dyn EmbeddingBackend>,
    config: ComparatorConfig,
}

impl std::fmt::Debug for GraphComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphComparator")
            .field("backend", &self.backend.method())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for GraphComparator {
    fn default() -> Self {
        Self::with_tfidf(ComparatorConfig::default())
    }
}

impl GraphComparator {
    pub fn new(backend: Box<dyn EmbeddingBackend>, config: ComparatorConfig) -> Self {
        Self { backend, config }
    }

    /// Comparator whose semantic facet always uses TF-IDF
    pub fn with_tfidf(config: ComparatorConfig) -> Self {
        Self::new(Box::new(FallbackBackend::tfidf_only()), config)
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    pub fn backend(&self) -> &dyn EmbeddingBackend {
        self.backend.as_ref()
    }

    /// Compare two triple lists. `text_a` and `text_b` are the analyzed
    /// document bodies, used only for density.
    pub fn compare(
        &self,
        triples_a: &[Triple],
        triples_b: &[Triple],
        text_a: &str,
        text_b: &str,
    ) -> ComparisonReport {
        let start = Instant::now();
        info!(
            triples_a = triples_a.len(),
            triples_b = triples_b.len(),
            "Comparing knowledge graphs"
        );

        let triple_overlap = triple_overlap(triples_a, triples_b);
        debug!(
            exact = triple_overlap.exact_overlap_count,
            fuzzy = triple_overlap.fuzzy_overlap_count,
            "Computed triple overlap"
        );

        let semantic_similarity = semantic_similarity(
            triples_a,
            triples_b,
            self.backend.as_ref(),
            self.config.similarity_threshold,
        );

        let graph_embeddings = graph_embeddings(triples_a, triples_b, &self.config.graph);
        let entity_coherence = entity_coherence(triples_a, triples_b, self.config.limits());
        let contradictions = detect_contradictions(triples_a, triples_b);
        debug!(
            common_entities = entity_coherence.common_entities,
            contradictions = contradictions.contradiction_count,
            "Computed coherence and contradictions"
        );

        let report = ComparisonReport {
            basic_stats: basic_stats(triples_a, triples_b),
            triple_overlap,
            semantic_similarity,
            graph_embeddings,
            graph_density: graph_density(triples_a.len(), triples_b.len(), text_a, text_b),
            entity_coherence,
            provenance_analysis: provenance_analysis(triples_a, triples_b),
            contradictions,
        };

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            exact_overlap = report.triple_overlap.exact_overlap_score,
            semantic = report.semantic_similarity.average_similarity,
            "Comparison complete"
        );
        report
    }
}
