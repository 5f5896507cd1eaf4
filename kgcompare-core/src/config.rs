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

//! Analyzer configuration
//!
//! Loaded with priority env > file > defaults. Every field has a default so
//! a partial TOML file is valid.

use crate::error::{KgError, Result};
use crate::triple::ExtractionMethod;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Graph embedding variant names accepted in `[graph].variants`
pub const GRAPH_VARIANTS: [&str; 3] = ["TransE", "DistMult", "ComplEx"];

/// Canonical spelling of a graph variant name, matched case-insensitively
pub fn canonical_graph_variant(name: &str) -> Option<&'static str> {
    GRAPH_VARIANTS
        .iter()
        .copied()
        .find(|v| v.eq_ignore_ascii_case(name.trim()))
}

/// Top-level configuration for an analysis run
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub embeddings: EmbeddingConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Input beyond this many characters is silently ignored
    #[serde(default = "default_max_parse_chars")]
    pub max_parse_chars: usize,

    /// Enabled strategies, in execution order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,

    /// Minimum tokens strictly between two entities of a pair
    #[serde(default = "default_min_entity_gap")]
    pub min_entity_gap: usize,

    /// Maximum tokens strictly between two entities of a pair
    #[serde(default = "default_max_entity_gap")]
    pub max_entity_gap: usize,

    /// How far after an attribution phrase to look for a real reference
    #[serde(default = "default_citation_lookahead")]
    pub citation_lookahead_chars: usize,
}

/// Which embedding backend to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Neural encoder when compiled in and loadable, TF-IDF otherwise
    Auto,
    /// Neural encoder only, TF-IDF on failure
    Neural,
    /// TF-IDF only
    Tfidf,
}

impl BackendKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(BackendKind::Auto),
            "neural" | "sentence-transformers" | "fastembed" => Some(BackendKind::Neural),
            "tfidf" | "tf-idf" => Some(BackendKind::Tfidf),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    #[serde(default = "default_backend")]
    pub backend: BackendKind,

    /// Local directory holding the encoder model files
    #[serde(default = "default_model_cache_dir")]
    pub model_cache_dir: PathBuf,

    /// Texts per encoder call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Cosine similarity above which two triples count as a similar pair
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphConfig {
    /// Embedding dimension
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// RNG seed for embedding initialization
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Triples per side compared pairwise
    #[serde(default = "default_max_triples_per_side")]
    pub max_triples_per_side: usize,

    /// Scoring variants to evaluate
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Triples per side included as a sample in the report
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    #[serde(default = "default_max_inconsistent_examples")]
    pub max_inconsistent_examples: usize,

    /// Relations listed per side in an inconsistent example
    #[serde(default = "default_max_example_relations")]
    pub max_example_relations: usize,

    #[serde(default = "default_source_a_label")]
    pub source_a_label: String,

    #[serde(default = "default_source_b_label")]
    pub source_b_label: String,
}

// Default values
fn default_max_parse_chars() -> usize {
    1_000_000
}

fn default_strategies() -> Vec<String> {
    ExtractionMethod::ALL
        .iter()
        .map(|m| m.as_str().to_string())
        .collect()
}

fn default_min_entity_gap() -> usize {
    1
}

fn default_max_entity_gap() -> usize {
    9
}

fn default_citation_lookahead() -> usize {
    50
}

fn default_backend() -> BackendKind {
    BackendKind::Auto
}

fn default_model_cache_dir() -> PathBuf {
    PathBuf::from(".fastembed_cache")
}

fn default_batch_size() -> usize {
    64
}

fn default_similarity_threshold() -> f64 {
    0.7
}

fn default_dimension() -> usize {
    50
}

fn default_seed() -> u64 {
    42
}

fn default_max_triples_per_side() -> usize {
    100
}

fn default_variants() -> Vec<String> {
    GRAPH_VARIANTS.iter().map(|v| v.to_string()).collect()
}

fn default_sample_size() -> usize {
    20
}

fn default_max_inconsistent_examples() -> usize {
    5
}

fn default_max_example_relations() -> usize {
    3
}

fn default_source_a_label() -> String {
    "source_a".to_string()
}

fn default_source_b_label() -> String {
    "source_b".to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_parse_chars: default_max_parse_chars(),
            strategies: default_strategies(),
            min_entity_gap: default_min_entity_gap(),
            max_entity_gap: default_max_entity_gap(),
            citation_lookahead_chars: default_citation_lookahead(),
        }
    }
}

impl ExtractionConfig {
    /// Parsed strategy list; unknown names are skipped
    pub fn methods(&self) -> Vec<ExtractionMethod> {
        self.strategies
            .iter()
            .filter_map(|s| ExtractionMethod::from_str(s))
            .collect()
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model_cache_dir: default_model_cache_dir(),
            batch_size: default_batch_size(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            seed: default_seed(),
            max_triples_per_side: default_max_triples_per_side(),
            variants: default_variants(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            max_inconsistent_examples: default_max_inconsistent_examples(),
            max_example_relations: default_max_example_relations(),
            source_a_label: default_source_a_label(),
            source_b_label: default_source_b_label(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| KgError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration with priority: env > file > defaults
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let mut config = if let Some(path) = config_file {
            if path.exists() {
                tracing::info!("Loading configuration from file: {:?}", path);
                Self::from_file(&path)?
            } else {
                tracing::warn!("Config file not found: {:?}, using defaults", path);
                Self::default()
            }
        } else {
            Self::default()
        };

        config.merge_with_env();
        config.validate()?;
        config.canonicalize();
        Ok(config)
    }

    /// Apply environment overrides
    ///
    /// Supported environment variables:
    /// - KGCOMPARE_MAX_PARSE_CHARS: Truncation length (default: 1000000)
    /// - KGCOMPARE_EMBEDDING_BACKEND: auto | neural | tfidf (default: auto)
    /// - KGCOMPARE_MODEL_CACHE_DIR: Encoder model directory
    /// - KGCOMPARE_SIMILARITY_THRESHOLD: Similar-pair threshold (default: 0.7)
    /// - KGCOMPARE_GRAPH_DIMENSION: Graph embedding dimension (default: 50)
    /// - KGCOMPARE_GRAPH_SEED: Graph embedding seed (default: 42)
    /// - KGCOMPARE_SAMPLE_SIZE: Triples sampled per side (default: 20)
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any variable source
    pub fn merge_with_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = parse_var("KGCOMPARE_MAX_PARSE_CHARS", &lookup) {
            self.extraction.max_parse_chars = val;
        }

        if let Some(raw) = lookup("KGCOMPARE_EMBEDDING_BACKEND") {
            match BackendKind::from_str(&raw) {
                Some(kind) => self.embeddings.backend = kind,
                None => tracing::warn!(value = %raw, "Ignoring unknown KGCOMPARE_EMBEDDING_BACKEND"),
            }
        }

        if let Some(dir) = lookup("KGCOMPARE_MODEL_CACHE_DIR") {
            self.embeddings.model_cache_dir = PathBuf::from(dir);
        }

        if let Some(val) = parse_var("KGCOMPARE_SIMILARITY_THRESHOLD", &lookup) {
            self.embeddings.similarity_threshold = val;
        }

        if let Some(val) = parse_var("KGCOMPARE_GRAPH_DIMENSION", &lookup) {
            self.graph.dimension = val;
        }

        if let Some(val) = parse_var("KGCOMPARE_GRAPH_SEED", &lookup) {
            self.graph.seed = val;
        }

        if let Some(val) = parse_var("KGCOMPARE_SAMPLE_SIZE", &lookup) {
            self.report.sample_size = val;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.graph.dimension == 0 {
            return Err(KgError::Config("graph.dimension must be positive".into()));
        }
        if self.embeddings.batch_size == 0 {
            return Err(KgError::Config("embeddings.batch_size must be positive".into()));
        }
        let threshold = self.embeddings.similarity_threshold;
        if !(-1.0..=1.0).contains(&threshold) {
            return Err(KgError::Config(format!(
                "embeddings.similarity_threshold {} outside [-1, 1]",
                threshold
            )));
        }
        if self.extraction.min_entity_gap > self.extraction.max_entity_gap {
            return Err(KgError::Config(
                "extraction.min_entity_gap exceeds max_entity_gap".into(),
            ));
        }
        if self.extraction.strategies.is_empty() {
            return Err(KgError::Config("extraction.strategies is empty".into()));
        }
        for name in &self.extraction.strategies {
            if ExtractionMethod::from_str(name).is_none() {
                return Err(KgError::Config(format!("unknown strategy: {}", name)));
            }
        }
        for name in &self.graph.variants {
            if canonical_graph_variant(name).is_none() {
                return Err(KgError::Config(format!("unknown graph variant: {}", name)));
            }
        }
        Ok(())
    }

    /// Rewrite graph variant names to their canonical spelling. Unknown
    /// names are left as they are.
    pub fn canonicalize(&mut self) {
        for name in &mut self.graph.variants {
            if let Some(canonical) = canonical_graph_variant(name) {
                *name = canonical.to_string();
            }
        }
    }
}

fn parse_var<T, F>(key: &str, lookup: &F) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(val) => Some(val),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring invalid environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.extraction.max_parse_chars, 1_000_000);
        assert_eq!(config.extraction.methods().len(), 4);
        assert_eq!(config.graph.dimension, 50);
        assert_eq!(config.graph.seed, 42);
        assert_eq!(config.embeddings.similarity_threshold, 0.7);
        assert_eq!(config.report.sample_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
            [embeddings]
            backend = "tfidf"

            [graph]
            dimension = 16
            variants = ["TransE"]
            "#,
        )
        .unwrap();
        assert_eq!(config.embeddings.backend, BackendKind::Tfidf);
        assert_eq!(config.embeddings.batch_size, 64);
        assert_eq!(config.graph.dimension, 16);
        assert_eq!(config.graph.seed, 42);
        assert_eq!(config.graph.variants, vec!["TransE".to_string()]);
        assert_eq!(config.extraction, ExtractionConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AnalyzerConfig::default();
        config.graph.dimension = 0;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.extraction.strategies = vec!["telepathy".into()];
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.graph.variants = vec!["RotatE".into()];
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.embeddings.similarity_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_vars() {
        let vars: std::collections::HashMap<&str, &str> = [
            ("KGCOMPARE_GRAPH_SEED", "7"),
            ("KGCOMPARE_EMBEDDING_BACKEND", "tf-idf"),
            ("KGCOMPARE_SAMPLE_SIZE", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = AnalyzerConfig::default();
        config.merge_with_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.graph.seed, 7);
        assert_eq!(config.embeddings.backend, BackendKind::Tfidf);
        assert_eq!(config.report.sample_size, 20);
    }

    #[test]
    fn test_graph_variant_names_canonicalized() {
        assert_eq!(canonical_graph_variant("transe"), Some("TransE"));
        assert_eq!(canonical_graph_variant(" COMPLEX "), Some("ComplEx"));
        assert_eq!(canonical_graph_variant("RotatE"), None);

        let mut config = AnalyzerConfig::default();
        config.graph.variants = vec!["transe".into(), "distmult".into()];
        assert!(config.validate().is_ok());
        config.canonicalize();
        assert_eq!(config.graph.variants, vec!["TransE".to_string(), "DistMult".to_string()]);
    }
}
