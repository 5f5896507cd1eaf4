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

//! Exact and fuzzy triple overlap

use super::PERCENT_DECIMALS;
use crate::report::TripleOverlap;
use kgcompare_core::{percentage, round_to, Triple};
use std::collections::{HashMap, HashSet};

/// Overlap of the distinct triples of both sides.
///
/// Exact matching compares verbatim `subject|predicate|object` keys. Fuzzy
/// matching counts the distinct verbatim A triples whose normalized key
/// appears among B's normalized keys, so it is never below the exact
/// count. Both scores are relative to the larger distinct set.
pub fn triple_overlap(a: &[Triple], b: &[Triple]) -> TripleOverlap {
    let mut distinct_a: HashMap<String, String> = HashMap::new();
    for t in a {
        distinct_a
            .entry(t.exact_key())
            .or_insert_with(|| t.fuzzy_key());
    }
    let exact_b: HashSet<String> = b.iter().map(Triple::exact_key).collect();
    let fuzzy_b: HashSet<String> = b.iter().map(Triple::fuzzy_key).collect();

    let exact_count = distinct_a.keys().filter(|k| exact_b.contains(*k)).count();
    let fuzzy_count = distinct_a.values().filter(|k| fuzzy_b.contains(*k)).count();

    let denominator = distinct_a.len().max(exact_b.len());
    TripleOverlap {
        exact_overlap_count: exact_count,
        exact_overlap_score: round_to(percentage(exact_count, denominator), PERCENT_DECIMALS),
        fuzzy_overlap_count: fuzzy_count,
        fuzzy_overlap_score: round_to(percentage(fuzzy_count, denominator), PERCENT_DECIMALS),
        unique_to_source_a: distinct_a.len() - exact_count,
        unique_to_source_b: exact_b.len() - exact_count,
    }
}
