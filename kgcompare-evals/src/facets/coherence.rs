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

//! Entity coherence across sources

use super::PERCENT_DECIMALS;
use crate::report::{EntityCoherence, InconsistentEntity};
use kgcompare_core::{normalize, percentage, round_to, Triple};
use std::collections::{BTreeMap, BTreeSet};

const CONSISTENT_ABOVE: f64 = 0.3;
const PARTIAL_ABOVE: f64 = 0.1;

/// Caps on the inconsistent examples kept in the report
#[derive(Debug, Clone, Copy)]
pub struct CoherenceLimits {
    pub max_examples: usize,
    pub max_relations: usize,
}

impl Default for CoherenceLimits {
    fn default() -> Self {
        Self {
            max_examples: 5,
            max_relations: 3,
        }
    }
}

/// Normalized subject -> verbatim `predicate:object` relations
fn relations_by_subject(triples: &[Triple]) -> BTreeMap<String, BTreeSet<String>> {
    let mut out: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for t in triples {
        out.entry(normalize(&t.subject))
            .or_default()
            .insert(t.relation_key());
    }
    out
}

/// Compare the relation sets of every subject found on both sides.
///
/// The Jaccard overlap of an entity's relation sets buckets it as
/// consistent (> 0.3), partially consistent (> 0.1) or inconsistent.
/// Entities are visited in sorted order, so the retained examples are
/// deterministic.
pub fn entity_coherence(a: &[Triple], b: &[Triple], limits: CoherenceLimits) -> EntityCoherence {
    let entities_a = relations_by_subject(a);
    let entities_b = relations_by_subject(b);

    let mut report = EntityCoherence::default();
    let mut ratio_sum = 0.0;

    for (entity, relations_a) in &entities_a {
        let Some(relations_b) = entities_b.get(entity) else {
            continue;
        };
        report.common_entities += 1;

        let shared = relations_a.intersection(relations_b).count();
        let total = relations_a.union(relations_b).count();
        let ratio = if total > 0 {
            shared as f64 / total as f64
        } else {
            0.0
        };
        ratio_sum += ratio;

        if ratio > CONSISTENT_ABOVE {
            report.consistent_entities += 1;
        } else if ratio > PARTIAL_ABOVE {
            report.partially_consistent_entities += 1;
        } else {
            report.inconsistent_entities += 1;
            if report.inconsistent_examples.len() < limits.max_examples {
                report.inconsistent_examples.push(InconsistentEntity {
                    entity: entity.clone(),
                    overlap_ratio: round_to(ratio * 100.0, PERCENT_DECIMALS),
                    source_a_relations: relations_a
                        .iter()
                        .take(limits.max_relations)
                        .cloned()
                        .collect(),
                    source_b_relations: relations_b
                        .iter()
                        .take(limits.max_relations)
                        .cloned()
                        .collect(),
                });
            }
        }
    }

    if report.common_entities > 0 {
        report.coherence_score = round_to(
            percentage(report.consistent_entities, report.common_entities),
            PERCENT_DECIMALS,
        );
        report.average_overlap_ratio = round_to(
            ratio_sum / report.common_entities as f64 * 100.0,
            PERCENT_DECIMALS,
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::{a, b};

    #[test]
    fn test_buckets() {
        let side_a = vec![
            a("Cattle", "be", "herbivore"),
            a("dog", "eat", "meat"),
            a("wolf", "hunt", "deer"),
        ];
        let side_b = vec![
            b("cattle", "be", "herbivore"),
            b("Dog", "eat", "fish"),
            b("horse", "eat", "hay"),
        ];
        let report = entity_coherence(&side_a, &side_b, CoherenceLimits::default());

        assert_eq!(report.common_entities, 2);
        assert_eq!(report.consistent_entities, 1);
        assert_eq!(report.inconsistent_entities, 1);
        assert_eq!(report.coherence_score, 50.0);
        assert_eq!(report.average_overlap_ratio, 50.0);

        let example = &report.inconsistent_examples[0];
        assert_eq!(example.entity, "dog");
        assert_eq!(example.overlap_ratio, 0.0);
        assert_eq!(example.source_a_relations, vec!["eat:meat"]);
        assert_eq!(example.source_b_relations, vec!["eat:fish"]);
    }

    #[test]
    fn test_partial_bucket() {
        // 1 shared of 5 distinct relations
        let side_a = vec![
            a("cow", "eat", "grass"),
            a("cow", "be", "mammal"),
            a("cow", "have", "horns"),
        ];
        let side_b = vec![
            b("cow", "eat", "grass"),
            b("cow", "produce", "milk"),
            b("cow", "live", "farms"),
        ];
        let report = entity_coherence(&side_a, &side_b, CoherenceLimits::default());
        assert_eq!(report.partially_consistent_entities, 1);
        assert_eq!(report.average_overlap_ratio, 20.0);
        assert_eq!(report.coherence_score, 0.0);
    }

    #[test]
    fn test_bucket_thresholds_are_exclusive() {
        // goat shares 3 of 10 relations, sheep 1 of 10
        let mut side_a = Vec::new();
        let mut side_b = Vec::new();
        for (entity, shared) in [("goat", 3), ("sheep", 1)] {
            for j in 0..10 {
                side_a.push(a(entity, "r", &format!("o{}", j)));
            }
            for j in 0..shared {
                side_b.push(b(entity, "r", &format!("o{}", j)));
            }
        }
        let report = entity_coherence(&side_a, &side_b, CoherenceLimits::default());

        assert_eq!(report.common_entities, 2);
        assert_eq!(report.consistent_entities, 0);
        assert_eq!(report.partially_consistent_entities, 1);
        assert_eq!(report.inconsistent_entities, 1);
        assert_eq!(report.inconsistent_examples[0].entity, "sheep");
        assert_eq!(report.inconsistent_examples[0].overlap_ratio, 10.0);
        assert_eq!(report.average_overlap_ratio, 20.0);
    }

    #[test]
    fn test_example_limits() {
        let side_a: Vec<_> = (0..8)
            .flat_map(|i| {
                let s = format!("e{}", i);
                (0..5).map(move |j| a(&s, "r", &format!("a{}", j)))
            })
            .collect();
        let side_b: Vec<_> = (0..8).map(|i| b(&format!("e{}", i), "r", "b")).collect();
        let report = entity_coherence(&side_a, &side_b, CoherenceLimits::default());
        assert_eq!(report.inconsistent_entities, 8);
        assert_eq!(report.inconsistent_examples.len(), 5);
        assert_eq!(report.inconsistent_examples[0].source_a_relations.len(), 3);
        assert_eq!(report.inconsistent_examples[0].source_a_relations[0], "r:a0");
    }

    #[test]
    fn test_no_common_entities() {
        let report = entity_coherence(
            &[a("x", "y", "z")],
            &[b("p", "q", "r")],
            CoherenceLimits::default(),
        );
        assert_eq!(report.common_entities, 0);
        assert_eq!(report.coherence_score, 100.0);
        assert_eq!(report.average_overlap_ratio, 0.0);
    }
}
