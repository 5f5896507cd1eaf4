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

//! Information density

use super::PERCENT_DECIMALS;
use crate::report::GraphDensity;
use kgcompare_core::round_to;

const PER_WORDS: f64 = 1000.0;

fn per_word(triples: usize, text: &str) -> f64 {
    match text.split_whitespace().count() {
        0 => 0.0,
        words => triples as f64 / words as f64,
    }
}

/// Triples per thousand whitespace-delimited words of each source text
pub fn graph_density(triples_a: usize, triples_b: usize, text_a: &str, text_b: &str) -> GraphDensity {
    let a = per_word(triples_a, text_a);
    let b = per_word(triples_b, text_b);
    GraphDensity {
        source_a_density: round_to(a * PER_WORDS, PERCENT_DECIMALS),
        source_b_density: round_to(b * PER_WORDS, PERCENT_DECIMALS),
        density_delta: round_to((a - b) * PER_WORDS, PERCENT_DECIMALS),
        density_ratio: if b > 0.0 {
            round_to(a / b, PERCENT_DECIMALS)
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density() {
        let d = graph_density(2, 1, "one two three four", "one two three four");
        assert_eq!(d.source_a_density, 500.0);
        assert_eq!(d.source_b_density, 250.0);
        assert_eq!(d.density_delta, 250.0);
        assert_eq!(d.density_ratio, 2.0);
    }

    #[test]
    fn test_zero_words_and_zero_ratio() {
        let d = graph_density(3, 0, "", "some words");
        assert_eq!(d, GraphDensity::default());
        let d = graph_density(3, 0, "some words", "");
        assert_eq!(d.density_ratio, 0.0);
        assert_eq!(d.source_a_density, 1500.0);
    }
}
