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

//! Report types
//!
//! Field names are the JSON keys of the comparison report. Every facet has
//! a fully zeroed form for empty input, and all floating values are finite.

use chrono::{DateTime, Utc};
use kgcompare_core::{DocumentMetadata, Triple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Triple counts per side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub source_a_triples: usize,
    pub source_b_triples: usize,
    pub total_triples: usize,
}

/// Set overlap of verbatim and normalized triples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripleOverlap {
    pub exact_overlap_count: usize,
    /// Percentage of the larger distinct-triple set
    pub exact_overlap_score: f64,
    pub fuzzy_overlap_count: usize,
    pub fuzzy_overlap_score: f64,
    pub unique_to_source_a: usize,
    pub unique_to_source_b: usize,
}

/// Sentence-embedding similarity between the two triple sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticSimilarity {
    pub average_similarity: f64,
    pub max_similarity: f64,
    /// Pairs above the similarity threshold
    pub similar_pairs_count: usize,
    pub similar_pairs_percentage: f64,
    /// `sentence-transformers`, `tf-idf` or `none (empty input)`
    pub method: String,
}

/// Similarity under one graph-embedding variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphEmbeddingScore {
    pub average_similarity: f64,
    pub max_similarity: f64,
    pub entity_count: usize,
    pub relation_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GraphEmbeddingScore {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Triples per thousand words
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDensity {
    pub source_a_density: f64,
    pub source_b_density: f64,
    pub density_delta: f64,
    /// `a / b`, or 0 when side B has no triples
    pub density_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InconsistentEntity {
    pub entity: String,
    pub overlap_ratio: f64,
    pub source_a_relations: Vec<String>,
    pub source_b_relations: Vec<String>,
}

/// Agreement of the relations attached to subjects present on both sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCoherence {
    pub common_entities: usize,
    pub consistent_entities: usize,
    pub partially_consistent_entities: usize,
    pub inconsistent_entities: usize,
    pub coherence_score: f64,
    pub average_overlap_ratio: f64,
    pub inconsistent_examples: Vec<InconsistentEntity>,
}

impl Default for EntityCoherence {
    /// No common entities is vacuously coherent
    fn default() -> Self {
        Self {
            common_entities: 0,
            consistent_entities: 0,
            partially_consistent_entities: 0,
            inconsistent_entities: 0,
            coherence_score: 100.0,
            average_overlap_ratio: 0.0,
            inconsistent_examples: Vec::new(),
        }
    }
}

/// Citation coverage and extraction-method mix
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceAnalysis {
    pub source_a_cited: usize,
    pub source_a_cited_percentage: f64,
    pub source_b_cited: usize,
    pub source_b_cited_percentage: f64,
    /// Absolute difference of the cited counts
    pub citation_gap: usize,
    /// Cited A triples with a normalized match among cited B triples
    pub cited_overlap: usize,
    pub provenance_quality_score_a: f64,
    pub provenance_quality_score_b: f64,
    pub extraction_methods_a: BTreeMap<String, usize>,
    pub extraction_methods_b: BTreeMap<String, usize>,
    pub unsourced_triples_a: usize,
    pub unsourced_triples_b: usize,
    pub unsourced_percentage_a: f64,
    pub unsourced_percentage_b: f64,
}

/// Two triples sharing subject and predicate with incompatible objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contradiction {
    pub subject: String,
    pub predicate: String,
    pub source_a_object: String,
    pub source_b_object: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContradictionReport {
    pub contradiction_count: usize,
    pub contradictions: Vec<Contradiction>,
    pub filtered_noise_triples_a: usize,
    pub filtered_noise_triples_b: usize,
}

/// All comparison facets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub basic_stats: BasicStats,
    pub triple_overlap: TripleOverlap,
    pub semantic_similarity: SemanticSimilarity,
    /// Keyed by variant name
    pub graph_embeddings: BTreeMap<String, GraphEmbeddingScore>,
    pub graph_density: GraphDensity,
    pub entity_coherence: EntityCoherence,
    pub provenance_analysis: ProvenanceAnalysis,
    pub contradictions: ContradictionReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub source_a_file: String,
    pub source_b_file: String,
    pub source_a_label: String,
    pub source_b_label: String,
    pub total_triples_a: usize,
    pub total_triples_b: usize,
    pub source_a_document: DocumentMetadata,
    pub source_b_document: DocumentMetadata,
    /// Method the semantic facet actually used
    pub embedding_method: String,
    pub analyzed_at: DateTime<Utc>,
}

/// Result of analyzing one pair of documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Leading triples of side A
    pub triples_sample_a: Vec<Triple>,
    pub triples_sample_b: Vec<Triple>,
    pub comparison: ComparisonReport,
    pub metadata: AnalysisMetadata,
}
