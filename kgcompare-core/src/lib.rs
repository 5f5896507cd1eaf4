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

//! kgcompare core
//!
//! Shared data model for comparing two documents through the knowledge
//! graph triples extracted from them: the [`Triple`] type, normalization,
//! the document reader, configuration and errors.

pub mod config;
pub mod document;
pub mod error;
pub mod normalize;
pub mod rdf;
pub mod triple;
pub mod vocabulary;

pub use config::{
    AnalyzerConfig, BackendKind, EmbeddingConfig, ExtractionConfig, GraphConfig, ReportConfig,
    canonical_graph_variant, GRAPH_VARIANTS,
};
pub use document::{parse_metadata, read_document, read_document_str, Document, DocumentMetadata};
pub use error::{KgError, Result};
pub use normalize::{normalize, percentage, round_to, NormalizedKey};
pub use rdf::NTriplesWriter;
pub use triple::{EntityLabel, ExtractionMethod, SourceTag, Triple};
pub use vocabulary::{SymbolId, Vocabulary};
