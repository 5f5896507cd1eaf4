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

//! Integration tests for file-based configuration and document loading

use kgcompare_core::{read_document, AnalyzerConfig, BackendKind, KgError};
use std::io::Write;
use tempfile::NamedTempFile;

/// Test loading a TOML config file through the layered loader
#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[extraction]
strategies = ["dependency", "nominal"]

[embeddings]
backend = "tfidf"
similarity_threshold = 0.5

[report]
source_a_label = "grokipedia"
source_b_label = "wikipedia"
"#
    )
    .unwrap();

    let config = AnalyzerConfig::load(Some(file.path().to_path_buf())).unwrap();
    assert_eq!(config.extraction.methods().len(), 2);
    assert_eq!(config.embeddings.backend, BackendKind::Tfidf);
    assert_eq!(config.embeddings.similarity_threshold, 0.5);
    assert_eq!(config.report.source_a_label, "grokipedia");
    assert_eq!(config.graph.dimension, 50);
}

/// Test that a missing config file falls back to defaults
#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config.extraction.max_parse_chars, 1_000_000);
}

/// Test that a malformed config file is rejected
#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[graph]\ndimension = \"fifty\"").unwrap();
    let err = AnalyzerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, KgError::TomlParse(_)));
}

/// Test reading an export file from disk
#[test]
fn test_read_document_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "Grokipedia Data Export\n\
         📖 Title: Dog\n\
         📚 References: 3\n\
         ================================================================================\n\
         📄 ARTICLE CONTENT:\n\
         The dog is a domesticated descendant of the wolf."
    )
    .unwrap();

    let doc = read_document(file.path()).unwrap();
    assert_eq!(doc.body, "The dog is a domesticated descendant of the wolf.");
    assert_eq!(doc.metadata.reference_count, Some(3));
    assert_eq!(doc.word_count(), 9);
}
