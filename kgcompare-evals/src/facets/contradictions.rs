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

//! Contradiction detection
//!
//! Triples that share a normalized subject and predicate across sources
//! but whose normalized objects differ contradict each other, unless one
//! object contains the other (a more specific restatement such as
//! "Labrador" and "Labrador Retriever"). A B triple whose object agrees
//! with any A object under the same key is not in conflict with that key
//! at all, so multi-valued relations stated by both sides are never
//! reported. Navigation and media boilerplate is removed first.

use crate::report::{Contradiction, ContradictionReport};
use kgcompare_core::{normalize, Triple};
use std::collections::HashMap;

const NOISE_PREDICATES: &[&str] = &["a", "an", "the", "media", "category", "template", "file"];
const NOISE_SENTENCE_MARKERS: &[&str] = &["media related to", "wikimedia commons", "external links"];
const SEE_ALSO_MAX_WORDS: usize = 10;

/// Whether a triple comes from page furniture rather than prose
pub fn is_noise(triple: &Triple) -> bool {
    let predicate = normalize(&triple.predicate);
    let object = normalize(&triple.object);
    let sentence = triple.sentence.to_lowercase();

    predicate.chars().count() < 2
        || NOISE_PREDICATES.contains(&predicate.as_str())
        || object.contains("wikimedia commons")
        || NOISE_SENTENCE_MARKERS.iter().any(|m| sentence.contains(m))
        || (sentence.contains("see also")
            && sentence.split_whitespace().count() < SEE_ALSO_MAX_WORDS)
}

fn compatible(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

pub fn detect_contradictions(a: &[Triple], b: &[Triple]) -> ContradictionReport {
    let kept_a: Vec<&Triple> = a.iter().filter(|t| !is_noise(t)).collect();
    let kept_b: Vec<&Triple> = b.iter().filter(|t| !is_noise(t)).collect();

    let mut index: HashMap<(String, String), Vec<(&Triple, String)>> = HashMap::new();
    for t in &kept_a {
        let key = t.normalized();
        index
            .entry(key.subject_predicate())
            .or_default()
            .push((t, key.object));
    }

    let mut contradictions = Vec::new();
    for t_b in &kept_b {
        let key = t_b.normalized();
        let Some(candidates) = index.get(&key.subject_predicate()) else {
            continue;
        };
        if candidates
            .iter()
            .any(|(_, object_a)| *object_a == key.object)
        {
            continue;
        }
        for (t_a, object_a) in candidates {
            if !compatible(object_a, &key.object) {
                contradictions.push(Contradiction {
                    subject: t_a.subject.clone(),
                    predicate: t_a.predicate.clone(),
                    source_a_object: t_a.object.clone(),
                    source_b_object: t_b.object.clone(),
                });
            }
        }
    }

    ContradictionReport {
        contradiction_count: contradictions.len(),
        contradictions,
        filtered_noise_triples_a: a.len() - kept_a.len(),
        filtered_noise_triples_b: b.len() - kept_b.len(),
    }
}
