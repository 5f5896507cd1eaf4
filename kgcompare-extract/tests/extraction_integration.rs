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

//! Integration tests for triple extraction

use kgcompare_core::{EntityLabel, ExtractionMethod, SourceTag};
use kgcompare_extract::nlp::split_sentences;
use kgcompare_extract::{ExtractorConfig, TripleExtractor};
use proptest::prelude::*;

const ARTICLE: &str = "Cattle are herbivores.[1] The domestic dog eats meat.
Paris is located in France. The milk of cows is nutritious.
According to some farmers, herds grew.";

fn spo(t: &kgcompare_core::Triple) -> (&str, &str, &str) {
    (t.subject.as_str(), t.predicate.as_str(), t.object.as_str())
}

/// Test that each strategy contributes its characteristic triple
#[test]
fn test_strategies_over_article() {
    let extractor = TripleExtractor::new().unwrap();
    let triples = extractor.extract(ARTICLE, SourceTag::A);

    let by = |method: ExtractionMethod| -> Vec<(&str, &str, &str)> {
        triples
            .iter()
            .filter(|t| t.extraction_method == method)
            .map(spo)
            .collect()
    };

    assert!(by(ExtractionMethod::Dependency).contains(&("Cattle", "be", "herbivores")));
    assert!(by(ExtractionMethod::Dependency).contains(&("The domestic dog", "eat", "meat")));
    assert!(by(ExtractionMethod::SurfacePattern).contains(&("Paris", "located_in", "France")));
    assert!(by(ExtractionMethod::EntityPair).contains(&("Paris", "locate", "France")));
    assert!(by(ExtractionMethod::Nominal).contains(&("The milk of cows", "has_part", "cows")));
}

/// Test that duplicates across strategies are preserved
#[test]
fn test_cross_strategy_duplicates_kept() {
    let extractor = TripleExtractor::new().unwrap();
    let triples = extractor.extract("Paris is located in France.", SourceTag::B);
    let same: Vec<_> = triples
        .iter()
        .filter(|t| spo(t) == ("Paris", "locate", "France"))
        .collect();
    assert_eq!(same.len(), 2);
    assert_ne!(same[0].extraction_method, same[1].extraction_method);
}

/// Test citation flags and entity types on extracted triples
#[test]
fn test_triple_annotations() {
    let extractor = TripleExtractor::new().unwrap();
    let triples = extractor.extract(ARTICLE, SourceTag::A);

    let cattle = triples.iter().find(|t| t.subject == "Cattle").unwrap();
    assert!(cattle.has_citation);
    assert_eq!(cattle.sentence, "Cattle are herbivores.[1]");

    let paris = triples
        .iter()
        .find(|t| t.extraction_method == ExtractionMethod::EntityPair)
        .unwrap();
    assert_eq!(paris.subject_type, Some(EntityLabel::Gpe));
    assert!(!paris.has_citation);

    let dependency = triples
        .iter()
        .find(|t| t.extraction_method == ExtractionMethod::Dependency)
        .unwrap();
    assert!(dependency.subject_type.is_none());
}

/// Test extraction from configuration
#[test]
fn test_config_driven_extractor() {
    let mut config = kgcompare_core::ExtractionConfig::default();
    config.strategies = vec!["nominal".to_string()];
    let extractor = TripleExtractor::with_config(ExtractorConfig::from(&config)).unwrap();
    let triples = extractor.extract(ARTICLE, SourceTag::A);
    assert!(!triples.is_empty());
    assert!(triples
        .iter()
        .all(|t| t.extraction_method == ExtractionMethod::Nominal));
}

/// Test that boilerplate-only and blank documents produce nothing
#[test]
fn test_degenerate_documents() {
    let extractor = TripleExtractor::new().unwrap();
    assert!(extractor.extract("", SourceTag::A).is_empty());
    assert!(extractor.extract("\n\n   \n", SourceTag::A).is_empty());
    assert!(extractor.extract("== == ==", SourceTag::A).is_empty());
}

proptest! {
    /// Test that arbitrary text never panics and keeps the source tag
    #[test]
    fn prop_extract_is_total(text in "\\PC{0,200}") {
        let extractor = TripleExtractor::new().unwrap();
        let triples = extractor.extract(&text, SourceTag::B);
        prop_assert!(triples.iter().all(|t| t.source == SourceTag::B));
    }

    /// Test that sentences are non-empty slices of the input
    #[test]
    fn prop_sentences_are_substrings(text in "[A-Za-z .!?\\n\\[\\]0-9]{0,120}") {
        for sentence in split_sentences(&text) {
            prop_assert!(!sentence.trim().is_empty());
            prop_assert!(text.contains(sentence));
        }
    }
}
