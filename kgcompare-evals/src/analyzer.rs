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

//! End-to-end analysis of two documents

use crate::comparator::{ComparatorConfig, GraphComparator};
use crate::error::Result;
use crate::report::{AnalysisMetadata, AnalysisReport};
use chrono::Utc;
use kgcompare_core::{read_document, AnalyzerConfig, Document, SourceTag};
use kgcompare_embeddings::{EmbeddingBackend, FallbackBackend};
use kgcompare_extract::TripleExtractor;
use std::path::Path;
use tracing::info;

/// Reads two documents, extracts triples from each and compares them.
///
/// Construction loads the extractor and the embedding backend once; an
/// analyzer can be reused across document pairs.
#[derive(Debug)]
pub struct KnowledgeGraphAnalyzer {
    config: AnalyzerConfig,
    extractor: TripleExtractor,
    comparator: GraphComparator,
}

impl KnowledgeGraphAnalyzer {
    /// Analyzer with the backend selected by `config.embeddings`
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let backend = FallbackBackend::from_config(&config.embeddings);
        Self::with_backend(config, Box::new(backend))
    }

    /// Analyzer with an explicit sentence-embedding backend
    pub fn with_backend(
        mut config: AnalyzerConfig,
        backend: Box<dyn EmbeddingBackend>,
    ) -> Result<Self> {
        config.validate()?;
        config.canonicalize();
        let extractor = TripleExtractor::with_config((&config.extraction).into())?;
        let comparator = GraphComparator::new(backend, ComparatorConfig::from(&config));
        Ok(Self {
            config,
            extractor,
            comparator,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn extractor(&self) -> &TripleExtractor {
        &self.extractor
    }

    /// Analyze two export files. Unreadable input is the only error.
    pub fn analyze_files(
        &self,
        path_a: impl AsRef<Path>,
        path_b: impl AsRef<Path>,
    ) -> Result<AnalysisReport> {
        let (path_a, path_b) = (path_a.as_ref(), path_b.as_ref());
        let doc_a = read_document(path_a)?;
        let doc_b = read_document(path_b)?;
        Ok(self.analyze_documents(
            &path_a.display().to_string(),
            &doc_a,
            &path_b.display().to_string(),
            &doc_b,
        ))
    }

    /// Analyze two already-read documents. `name_a` and `name_b` are
    /// recorded in the report metadata.
    pub fn analyze_documents(
        &self,
        name_a: &str,
        doc_a: &Document,
        name_b: &str,
        doc_b: &Document,
    ) -> AnalysisReport {
        info!(
            source_a = name_a,
            source_b = name_b,
            words_a = doc_a.word_count(),
            words_b = doc_b.word_count(),
            "Analyzing documents"
        );

        let triples_a = self.extractor.extract(&doc_a.body, SourceTag::A);
        let triples_b = self.extractor.extract(&doc_b.body, SourceTag::B);
        info!(
            triples_a = triples_a.len(),
            triples_b = triples_b.len(),
            "Extracted triples"
        );

        let comparison = self
            .comparator
            .compare(&triples_a, &triples_b, &doc_a.body, &doc_b.body);

        let report_config = &self.config.report;
        let sample = report_config.sample_size;
        AnalysisReport {
            triples_sample_a: triples_a.iter().take(sample).cloned().collect(),
            triples_sample_b: triples_b.iter().take(sample).cloned().collect(),
            metadata: AnalysisMetadata {
                source_a_file: name_a.to_string(),
                source_b_file: name_b.to_string(),
                source_a_label: report_config.source_a_label.clone(),
                source_b_label: report_config.source_b_label.clone(),
                total_triples_a: triples_a.len(),
                total_triples_b: triples_b.len(),
                source_a_document: doc_a.metadata.clone(),
                source_b_document: doc_b.metadata.clone(),
                embedding_method: comparison.semantic_similarity.method.clone(),
                analyzed_at: Utc::now(),
            },
            comparison,
        }
    }
}
