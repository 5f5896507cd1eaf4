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

//! Citation-based provenance analysis

use super::PERCENT_DECIMALS;
use crate::report::ProvenanceAnalysis;
use kgcompare_core::{percentage, round_to, NormalizedKey, Triple};
use std::collections::{BTreeMap, HashSet};

fn method_histogram(triples: &[Triple]) -> BTreeMap<String, usize> {
    let mut out = BTreeMap::new();
    for t in triples {
        *out.entry(t.extraction_method.as_str().to_string())
            .or_insert(0) += 1;
    }
    out
}

pub fn provenance_analysis(a: &[Triple], b: &[Triple]) -> ProvenanceAnalysis {
    let cited_a = a.iter().filter(|t| t.has_citation).count();
    let cited_b = b.iter().filter(|t| t.has_citation).count();
    let pct_a = round_to(percentage(cited_a, a.len()), PERCENT_DECIMALS);
    let pct_b = round_to(percentage(cited_b, b.len()), PERCENT_DECIMALS);

    let cited_keys_b: HashSet<NormalizedKey> = b
        .iter()
        .filter(|t| t.has_citation)
        .map(Triple::normalized)
        .collect();
    let cited_overlap = a
        .iter()
        .filter(|t| t.has_citation && cited_keys_b.contains(&t.normalized()))
        .count();

    ProvenanceAnalysis {
        source_a_cited: cited_a,
        source_a_cited_percentage: pct_a,
        source_b_cited: cited_b,
        source_b_cited_percentage: pct_b,
        citation_gap: cited_a.abs_diff(cited_b),
        cited_overlap,
        provenance_quality_score_a: pct_a,
        provenance_quality_score_b: pct_b,
        extraction_methods_a: method_histogram(a),
        extraction_methods_b: method_histogram(b),
        unsourced_triples_a: a.len() - cited_a,
        unsourced_triples_b: b.len() - cited_b,
        unsourced_percentage_a: round_to(percentage(a.len() - cited_a, a.len()), PERCENT_DECIMALS),
        unsourced_percentage_b: round_to(percentage(b.len() - cited_b, b.len()), PERCENT_DECIMALS),
    }
}
