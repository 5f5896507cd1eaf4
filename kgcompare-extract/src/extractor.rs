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

//! Triple extraction over whole documents
//!
//! Parses a document body once with the [`Pipeline`] and runs every
//! configured [`ExtractionStrategy`] over every sentence. Strategy output is
//! concatenated in strategy order, so duplicates across strategies are kept.
//!
//! ## Failure handling
//!
//! Extraction never fails on input text. Oversized input is truncated to
//! `max_parse_chars` characters, and a strategy error on one sentence only
//! drops that sentence for that strategy.
//!
//! ## Example
//!
//! Input: "Paris is located in France."
//!
//! Output:
//! - (Paris, locate, France) via dependency
//! - (Paris, located_in, France) via surface_pattern
//! - (Paris, locate, France) via entity_pair

use crate::citation::{CitationDetector, DEFAULT_LOOKAHEAD_CHARS};
use crate::error::Result;
use crate::nlp::Pipeline;
use crate::strategies::{build_strategy, EntityGap, ExtractionStrategy};
use kgcompare_core::{ExtractionConfig, ExtractionMethod, SourceTag, Triple};
use std::collections::BTreeMap;
use tracing::debug;

/// Configuration for the triple extractor
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Input beyond this many characters is silently ignored
    pub max_parse_chars: usize,
    /// Strategies to run, in order
    pub strategies: Vec<ExtractionMethod>,
    /// Entity-pair span bounds
    pub entity_gap: EntityGap,
    /// Window after an attribution phrase in which a source must appear
    pub citation_lookahead_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_parse_chars: 1_000_000,
            strategies: ExtractionMethod::ALL.to_vec(),
            entity_gap: EntityGap::default(),
            citation_lookahead_chars: DEFAULT_LOOKAHEAD_CHARS,
        }
    }
}

impl From<&ExtractionConfig> for ExtractorConfig {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            max_parse_chars: config.max_parse_chars,
            strategies: config.methods(),
            entity_gap: EntityGap {
                min: config.min_entity_gap,
                max: config.max_entity_gap,
            },
            citation_lookahead_chars: config.citation_lookahead_chars,
        }
    }
}

/// Rule-based triple extractor
pub struct TripleExtractor {
    config: ExtractorConfig,
    pipeline: Pipeline,
    citations: CitationDetector,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl std::fmt::Debug for TripleExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripleExtractor")
            .field("config", &self.config)
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.method()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TripleExtractor {
    /// Extractor running all four strategies with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        let strategies = config
            .strategies
            .iter()
            .map(|&method| build_strategy(method, config.entity_gap))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            citations: CitationDetector::new(config.citation_lookahead_chars),
            pipeline: Pipeline::new(),
            strategies,
            config,
        })
    }

    /// Append a custom strategy after the configured ones
    pub fn with_strategy(mut self, strategy: Box<dyn ExtractionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract every triple from `text`, tagging each with `source`
    pub fn extract(&self, text: &str, source: SourceTag) -> Vec<Triple> {
        let text = truncate_chars(text, self.config.max_parse_chars);
        let sentences = self.pipeline.parse(text);
        let cited: Vec<bool> = sentences
            .iter()
            .map(|s| self.citations.has_citation(&s.text))
            .collect();

        let mut triples = Vec::new();
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();

        for strategy in &self.strategies {
            let method = strategy.method();
            let before = triples.len();

            for (sentence, &has_citation) in sentences.iter().zip(&cited) {
                let candidates = match strategy.extract(sentence) {
                    Ok(candidates) => candidates,
                    Err(e) => {
                        debug!(
                            method = %method,
                            sentence = sentence.index,
                            error = %e,
                            "Skipping sentence"
                        );
                        continue;
                    }
                };

                triples.extend(candidates.into_iter().map(|c| {
                    let triple = Triple::new(c.subject, c.predicate, c.object, source, method)
                        .with_sentence(sentence.text.clone())
                        .with_citation(has_citation);
                    match (c.subject_type, c.object_type) {
                        (Some(s), Some(o)) => triple.with_types(s, o),
                        _ => triple,
                    }
                }));
            }

            *counts.entry(method.as_str()).or_default() += triples.len() - before;
        }

        debug!(
            source = %source,
            sentences = sentences.len(),
            total = triples.len(),
            per_strategy = ?counts,
            "Extracted triples"
        );
        triples
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
