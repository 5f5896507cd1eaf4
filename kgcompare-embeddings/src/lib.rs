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

//! kgcompare embeddings
//!
//! Two kinds of vectors feed the comparison:
//!
//! - **Sentence embeddings** of `"subject predicate object"` strings, from an
//!   [`EmbeddingBackend`]. The optional neural encoder (feature
//!   `fastembed-embeddings`) runs locally; [`FallbackBackend`] degrades to
//!   a per-batch [`TfIdfBackend`] whenever it is missing or fails.
//! - **Graph embeddings** of entities and relations from a
//!   [`GraphEmbeddingModel`] under a swappable [`ScoringFunction`].

pub mod backend;
pub mod error;
pub mod fallback;
pub mod graph;
#[cfg(feature = "fastembed-embeddings")]
pub mod neural;
pub mod similarity;
pub mod tfidf;

pub use backend::{Embedding, EmbeddingBackend, EmbeddingBatch, EmbeddingMethod, SparseVector};
pub use error::{EmbedError, GraphEmbeddingError, Result};
pub use fallback::FallbackBackend;
pub use graph::{GraphEmbeddingModel, ScoringFunction};
#[cfg(feature = "fastembed-embeddings")]
pub use neural::NeuralBackend;
pub use similarity::{cosine, pairwise_cosine, pairwise_cosine_dense, summarize, SimilarityStats};
pub use tfidf::{TfIdfBackend, TfIdfVectorizer};
