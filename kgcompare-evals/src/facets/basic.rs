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

use crate::report::BasicStats;
use kgcompare_core::Triple;

pub fn basic_stats(a: &[Triple], b: &[Triple]) -> BasicStats {
    BasicStats {
        source_a_triples: a.len(),
        source_b_triples: b.len(),
        total_triples: a.len() + b.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::{a, b};

    #[test]
    fn test_counts() {
        let stats = basic_stats(&[a("x", "y", "z")], &[b("x", "y", "z"), b("p", "q", "r")]);
        assert_eq!(stats.total_triples, 3);
        assert_eq!(basic_stats(&[], &[]), BasicStats::default());
    }
}
