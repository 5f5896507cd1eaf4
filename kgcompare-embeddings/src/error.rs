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

//! Error types for embedding backends and graph embeddings

use thiserror::Error;

/// Errors from sentence embedding backends
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Embedding backend unavailable: {0}")]
    Unavailable(String),

    #[error("Embedding backend error: {0}")]
    Backend(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty vocabulary: no input text contains a term")]
    EmptyVocabulary,
}

/// Errors from fitting or querying a graph embedding model
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphEmbeddingError {
    #[error("Empty triple sets")]
    EmptyTriples,

    #[error("No embeddings generated")]
    NoEmbeddings,

    #[error("Unknown scoring function: {0}")]
    UnknownVariant(String),

    #[error("Invalid initialization distribution: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
