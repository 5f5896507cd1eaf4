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

//! # kgcompare evals
//!
//! Compares two documents through the knowledge-graph triples extracted
//! from them.
//!
//! - [`GraphComparator`] runs the comparison facets (overlap, semantic and
//!   graph-embedding similarity, density, entity coherence, provenance,
//!   contradictions) over two triple lists.
//! - [`KnowledgeGraphAnalyzer`] reads two export files, extracts triples
//!   and returns an [`AnalysisReport`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use kgcompare_core::AnalyzerConfig;
//! use kgcompare_evals::KnowledgeGraphAnalyzer;
//!
//! let analyzer = KnowledgeGraphAnalyzer::new(AnalyzerConfig::load(None)?)?;
//! let report = analyzer.analyze_files("wikipedia.txt", "grokipedia.txt")?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod analyzer;
pub mod comparator;
pub mod error;
pub mod facets;
pub mod report;

pub use analyzer::KnowledgeGraphAnalyzer;
pub use comparator::{ComparatorConfig, GraphComparator};
pub use error::{AnalysisError, Result};
pub use report::{
    AnalysisMetadata, AnalysisReport, BasicStats, ComparisonReport, Contradiction,
    ContradictionReport, EntityCoherence, GraphDensity, GraphEmbeddingScore, InconsistentEntity,
    ProvenanceAnalysis, SemanticSimilarity, TripleOverlap,
};
