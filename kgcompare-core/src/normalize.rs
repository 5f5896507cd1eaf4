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

//! Entity and triple normalization
//!
//! Identity for entities and triples across the two sources is the
//! case-folded, whitespace-collapsed form of their strings.

/// Normalize a string for comparison: lowercase, trim, collapse whitespace.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalized `(subject, predicate, object)` key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl NormalizedKey {
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: normalize(subject),
            predicate: normalize(predicate),
            object: normalize(object),
        }
    }

    /// Key used to index contradiction candidates
    pub fn subject_predicate(&self) -> (String, String) {
        (self.subject.clone(), self.predicate.clone())
    }
}

/// Round to a fixed number of decimals, mapping non-finite values to zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // avoid serializing -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `numerator / denominator * 100`, or zero for an empty denominator.
pub fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("  The  Cattle\tHerd \n"), "the cattle herd");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("Labrador Retriever"), "labrador retriever");
    }

    #[test]
    fn test_normalized_key() {
        let a = NormalizedKey::new("Cattle ", "BE", "herbivore");
        let b = NormalizedKey::new("cattle", "be", " Herbivore");
        assert_eq!(a, b);
        assert_eq!(a.subject_predicate(), ("cattle".to_string(), "be".to_string()));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.33333, 2), 33.33);
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(f64::NAN, 2), 0.0);
        assert_eq!(round_to(f64::INFINITY, 2), 0.0);
        assert!(round_to(-0.000001, 2).is_sign_positive());
    }

    #[test]
    fn test_percentage_empty_denominator() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn prop_normalize_has_no_outer_whitespace(s in "[ \\tA-Za-z]{0,40}") {
            let n = normalize(&s);
            prop_assert_eq!(n.trim(), n.as_str());
            prop_assert!(!n.contains("  "));
        }
    }
}
