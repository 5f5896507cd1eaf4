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

//! Comparison facets
//!
//! Each facet is a pure function of the two triple lists (plus text or an
//! embedding backend where needed) and returns a defined, zeroed report for
//! empty input instead of failing.

pub mod basic;
pub mod coherence;
pub mod contradictions;
pub mod density;
pub mod graph_embeddings;
pub mod overlap;
pub mod provenance;
pub mod semantic;

pub use basic::basic_stats;
pub use coherence::{entity_coherence, CoherenceLimits};
pub use contradictions::{detect_contradictions, is_noise};
pub use density::graph_density;
pub use graph_embeddings::graph_embeddings;
pub use overlap::triple_overlap;
pub use provenance::provenance_analysis;
pub use semantic::semantic_similarity;

/// Rounding for percentages
pub(crate) const PERCENT_DECIMALS: i32 = 2;
/// Rounding for similarity values
pub(crate) const SIMILARITY_DECIMALS: i32 = 4;
