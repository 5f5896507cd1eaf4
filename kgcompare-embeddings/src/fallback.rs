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

//! Primary-then-TF-IDF backend chain

use crate::backend::{EmbeddingBackend, EmbeddingBatch, EmbeddingMethod};
use crate::error::Result;
use crate::tfidf::TfIdfBackend;
use kgcompare_core::{BackendKind, EmbeddingConfig};
use tracing::warn;

/// Tries the primary backend and falls back to TF-IDF for the whole call
/// when it fails. Without a primary it is a plain TF-IDF backend.
pub struct FallbackBackend {
    primary: Option<Box<dyn EmbeddingBackend>>,
    fallback: TfIdfBackend,
}

impl FallbackBackend {
    pub fn new(primary: Box<dyn EmbeddingBackend>) -> Self {
        Self {
            primary: Some(primary),
            fallback: TfIdfBackend,
        }
    }

    pub fn tfidf_only() -> Self {
        Self {
            primary: None,
            fallback: TfIdfBackend,
        }
    }

    /// Build the chain described by `config`. A neural encoder that cannot
    /// be loaded degrades to TF-IDF.
    pub fn from_config(config: &EmbeddingConfig) -> Self {
        match config.backend {
            BackendKind::Tfidf => Self::tfidf_only(),
            BackendKind::Auto | BackendKind::Neural => match load_neural(config) {
                Some(primary) => Self::new(primary),
                None => Self::tfidf_only(),
            },
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

#[cfg(feature = "fastembed-embeddings")]
fn load_neural(config: &EmbeddingConfig) -> Option<Box<dyn EmbeddingBackend>> {
    match crate::neural::NeuralBackend::new(&config.model_cache_dir, config.batch_size) {
        Ok(backend) => Some(Box::new(backend)),
        Err(e) => {
            warn!(error = %e, "Sentence encoder unavailable, using tf-idf");
            None
        }
    }
}

#[cfg(not(feature = "fastembed-embeddings"))]
fn load_neural(config: &EmbeddingConfig) -> Option<Box<dyn EmbeddingBackend>> {
    if config.backend == BackendKind::Neural {
        warn!("Built without the fastembed-embeddings feature, using tf-idf");
    } else {
        tracing::info!("No sentence encoder compiled in, using tf-idf");
    }
    None
}

impl EmbeddingBackend for FallbackBackend {
    fn method(&self) -> EmbeddingMethod {
        self.primary
            .as_ref()
            .map(|p| p.method())
            .unwrap_or(EmbeddingMethod::TfIdf)
    }

    fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        if let Some(primary) = &self.primary {
            match primary.embed(texts) {
                Ok(batch) if batch.vectors.len() == texts.len() => return Ok(batch),
                Ok(batch) => warn!(
                    expected = texts.len(),
                    actual = batch.vectors.len(),
                    "Primary backend returned a short batch, falling back to tf-idf"
                ),
                Err(e) => warn!(error = %e, "Primary backend failed, falling back to tf-idf"),
            }
        }
        self.fallback.embed(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Embedding;
    use crate::error::EmbedError;
    use ndarray::Array1;

    struct Failing;

    impl EmbeddingBackend for Failing {
        fn method(&self) -> EmbeddingMethod {
            EmbeddingMethod::SentenceTransformer
        }

        fn embed(&self, _texts: &[String]) -> Result<EmbeddingBatch> {
            Err(EmbedError::Backend("connection reset".to_string()))
        }
    }

    struct Constant;

    impl EmbeddingBackend for Constant {
        fn method(&self) -> EmbeddingMethod {
            EmbeddingMethod::SentenceTransformer
        }

        fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch> {
            Ok(EmbeddingBatch {
                method: EmbeddingMethod::SentenceTransformer,
                vectors: texts
                    .iter()
                    .map(|_| Embedding::Dense(Array1::from_vec(vec![1.0, 0.0])))
                    .collect(),
            })
        }
    }

    fn texts() -> Vec<String> {
        vec!["cattle eat grass".to_string(), "dogs eat meat".to_string()]
    }

    #[test]
    fn test_primary_used_when_healthy() {
        let backend = FallbackBackend::new(Box::new(Constant));
        let batch = backend.embed(&texts()).unwrap();
        assert_eq!(batch.method, EmbeddingMethod::SentenceTransformer);
    }

    #[test]
    fn test_failure_falls_back_to_tfidf() {
        let backend = FallbackBackend::new(Box::new(Failing));
        let batch = backend.embed(&texts()).unwrap();
        assert_eq!(batch.method, EmbeddingMethod::TfIdf);
        assert_eq!(batch.vectors.len(), 2);
    }

    #[test]
    fn test_tfidf_config() {
        let config = EmbeddingConfig {
            backend: BackendKind::Tfidf,
            ..Default::default()
        };
        let backend = FallbackBackend::from_config(&config);
        assert!(!backend.has_primary());
        assert_eq!(backend.method(), EmbeddingMethod::TfIdf);
    }
}
