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

//! Local sentence encoder backed by fastembed (ONNX Runtime)
//!
//! Loads `all-MiniLM-L6-v2` from the model cache directory. The handle is
//! built once by the caller and reused for every batch.

use crate::backend::{Embedding, EmbeddingBackend, EmbeddingBatch, EmbeddingMethod};
use crate::error::{EmbedError, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use ndarray::Array1;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct NeuralBackend {
    model: TextEmbedding,
    batch_size: usize,
}

impl NeuralBackend {
    pub fn new(cache_dir: impl Into<PathBuf>, batch_size: usize) -> Result<Self> {
        let cache_dir = cache_dir.into();
        let options = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_cache_dir(cache_dir.clone())
            .with_show_download_progress(false);
        let model =
            TextEmbedding::try_new(options).map_err(|e| EmbedError::Unavailable(e.to_string()))?;
        info!(cache_dir = %cache_dir.display(), "Loaded sentence encoder");
        Ok(Self {
            model,
            batch_size: batch_size.max(1),
        })
    }
}

impl EmbeddingBackend for NeuralBackend {
    fn method(&self) -> EmbeddingMethod {
        EmbeddingMethod::SentenceTransformer
    }

    fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        let mut vectors = Vec::with_capacity(texts.len());
        let mut dimension: Option<usize> = None;

        for (batch, chunk) in texts.chunks(self.batch_size).enumerate() {
            let rows = self
                .model
                .embed(chunk.to_vec(), None)
                .map_err(|e| EmbedError::Backend(format!("batch {}: {}", batch, e)))?;
            if rows.len() != chunk.len() {
                return Err(EmbedError::Backend(format!(
                    "batch {}: expected {} embeddings, got {}",
                    batch,
                    chunk.len(),
                    rows.len()
                )));
            }
            for row in rows {
                let expected = *dimension.get_or_insert(row.len());
                if row.len() != expected {
                    return Err(EmbedError::DimensionMismatch {
                        expected,
                        actual: row.len(),
                    });
                }
                vectors.push(Embedding::Dense(Array1::from_vec(row)));
            }
            debug!(batch, size = chunk.len(), "Embedded batch");
        }

        Ok(EmbeddingBatch {
            method: EmbeddingMethod::SentenceTransformer,
            vectors,
        })
    }
}
