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

//! TF-IDF fallback vectorizer
//!
//! Terms are lowercase runs of two or more word characters. Weights are raw
//! term counts times the smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, and every row is scaled to unit L2 norm.
//! The vocabulary is fit on the batch being embedded.

use crate::backend::{Embedding, EmbeddingBackend, EmbeddingBatch, EmbeddingMethod, SparseVector};
use crate::error::{EmbedError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

static TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid term regex pattern"));

fn terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Vocabulary and idf weights fit on one corpus
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
}

impl TfIdfVectorizer {
    /// Fit on `corpus`. Term ids follow alphabetical order.
    pub fn fit(corpus: &[String]) -> Result<Self> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for text in corpus {
            let unique: BTreeSet<String> = terms(text).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_default() += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(EmbedError::EmptyVocabulary);
        }

        let n = corpus.len() as f32;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (id, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term, id as u32);
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
        }

        Ok(Self { vocabulary, idf })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_id(term).map(|id| self.idf[id as usize])
    }

    /// Unit-norm tf-idf vector of `text`; unseen terms are ignored
    pub fn transform(&self, text: &str) -> SparseVector {
        let pairs = terms(text)
            .iter()
            .filter_map(|t| self.term_id(t))
            .map(|id| (id, self.idf[id as usize]))
            .collect();
        SparseVector::from_pairs(pairs).normalized()
    }
}

/// Backend that fits a fresh [`TfIdfVectorizer`] per batch
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfBackend;

impl EmbeddingBackend for TfIdfBackend {
    fn method(&self) -> EmbeddingMethod {
        EmbeddingMethod::TfIdf
    }

    fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        if texts.is_empty() {
            return Ok(EmbeddingBatch {
                method: EmbeddingMethod::TfIdf,
                vectors: Vec::new(),
            });
        }
        let vectorizer = TfIdfVectorizer::fit(texts)?;
        debug!(
            texts = texts.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "Fitted tf-idf vocabulary"
        );
        Ok(EmbeddingBatch {
            method: EmbeddingMethod::TfIdf,
            vectors: texts
                .iter()
                .map(|t| Embedding::Sparse(vectorizer.transform(t)))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_terms_skip_single_characters() {
        assert_eq!(terms("A cat, a Dog!"), vec!["cat", "dog"]);
    }

    #[test]
    fn test_smoothed_idf() {
        let v = TfIdfVectorizer::fit(&corpus(&["cattle eat grass", "cattle be herbivore"])).unwrap();
        assert_eq!(v.vocabulary_len(), 5);
        assert!((v.idf("cattle").unwrap() - 1.0).abs() < 1e-6);
        let rare = (3.0f32 / 2.0).ln() + 1.0;
        assert!((v.idf("grass").unwrap() - rare).abs() < 1e-6);
        assert_eq!(v.term_id("be"), Some(0));
    }

    #[test]
    fn test_transform_is_unit_norm() {
        let v = TfIdfVectorizer::fit(&corpus(&["cattle eat grass", "dogs eat meat"])).unwrap();
        let x = v.transform("cattle eat grass");
        assert!((x.norm() - 1.0).abs() < 1e-6);
        assert!(v.transform("zebra").is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        assert!(matches!(
            TfIdfVectorizer::fit(&corpus(&["a b", "!"])),
            Err(EmbedError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_backend_batch() {
        let batch = TfIdfBackend
            .embed(&corpus(&["cattle be herbivore", "cattle be omnivore"]))
            .unwrap();
        assert_eq!(batch.method, EmbeddingMethod::TfIdf);
        assert_eq!(batch.vectors.len(), 2);
        assert!(TfIdfBackend.embed(&[]).unwrap().vectors.is_empty());
    }
}
