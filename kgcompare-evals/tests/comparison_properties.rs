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

//! Property tests for the comparison facets

use kgcompare_core::{ExtractionMethod, SourceTag, Triple};
use kgcompare_evals::facets::{detect_contradictions, triple_overlap};
use kgcompare_evals::{ComparisonReport, GraphComparator};
use proptest::prelude::*;

const WORDS: &[&str] = &["Cattle", "cattle", "dog", "Dog ", "meat", "grass", "be", "eat", "have"];

fn triple_strategy(source: SourceTag) -> impl Strategy<Value = Triple> {
    (
        prop::sample::select(WORDS),
        prop::sample::select(WORDS),
        prop::sample::select(WORDS),
        any::<bool>(),
        prop::sample::select(ExtractionMethod::ALL.to_vec()),
    )
        .prop_map(move |(s, p, o, cited, method)| {
            Triple::new(s, p, o, source, method)
                .with_sentence(format!("{} {} {}.", s, p, o))
                .with_citation(cited)
        })
}

fn sides() -> impl Strategy<Value = (Vec<Triple>, Vec<Triple>)> {
    (
        prop::collection::vec(triple_strategy(SourceTag::A), 0..12),
        prop::collection::vec(triple_strategy(SourceTag::B), 0..12),
    )
}

fn compare(a: &[Triple], b: &[Triple]) -> ComparisonReport {
    GraphComparator::default().compare(a, b, "some words here", "other words")
}

fn in_percent_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

proptest! {
    /// Test that normalized matching never finds fewer overlaps than verbatim matching
    #[test]
    fn prop_exact_overlap_bounded_by_fuzzy((a, b) in sides()) {
        let overlap = triple_overlap(&a, &b);
        prop_assert!(overlap.exact_overlap_count <= overlap.fuzzy_overlap_count);
        prop_assert!(overlap.exact_overlap_score <= overlap.fuzzy_overlap_score);
    }

    /// Test that every percentage and similarity stays in range
    #[test]
    fn prop_scores_in_range((a, b) in sides()) {
        let report = compare(&a, &b);
        prop_assert!(in_percent_range(report.triple_overlap.exact_overlap_score));
        prop_assert!(in_percent_range(report.triple_overlap.fuzzy_overlap_score));
        prop_assert!(in_percent_range(report.semantic_similarity.similar_pairs_percentage));
        prop_assert!(in_percent_range(report.entity_coherence.coherence_score));
        prop_assert!(in_percent_range(report.provenance_analysis.source_a_cited_percentage));
        prop_assert!(in_percent_range(report.provenance_analysis.source_b_cited_percentage));
        let sem = &report.semantic_similarity;
        prop_assert!(sem.average_similarity <= sem.max_similarity + 1e-4);
        prop_assert!(sem.max_similarity <= 1.0 + 1e-4);
    }

    /// Test that the serialized report never contains a null number
    #[test]
    fn prop_report_serializes_finite((a, b) in sides()) {
        let json = serde_json::to_string(&compare(&a, &b)).unwrap();
        prop_assert!(!json.contains("null"));
        prop_assert!(!json.contains("NaN"));
    }

    /// Test that a side compared with itself fully overlaps and never contradicts
    #[test]
    fn prop_identical_sides((a, _) in sides()) {
        prop_assume!(!a.is_empty());
        let overlap = triple_overlap(&a, &a);
        prop_assert_eq!(overlap.exact_overlap_score, 100.0);
        prop_assert_eq!(overlap.fuzzy_overlap_score, 100.0);
        prop_assert_eq!(detect_contradictions(&a, &a).contradiction_count, 0);
    }
}

/// Test that empty input yields the zeroed report
#[test]
fn test_empty_input_zeroed() {
    let report = compare(&[], &[]);
    assert_eq!(report.basic_stats.total_triples, 0);
    assert_eq!(report.triple_overlap.exact_overlap_count, 0);
    assert_eq!(report.semantic_similarity.average_similarity, 0.0);
    assert_eq!(report.semantic_similarity.method, "none (empty input)");
    assert_eq!(report.entity_coherence.common_entities, 0);
    assert_eq!(report.provenance_analysis.source_a_cited_percentage, 0.0);
    assert_eq!(report.contradictions.contradiction_count, 0);
}
