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

//! OpenIE-style surface templates over raw sentence text

use super::{Candidate, ExtractionStrategy};
use crate::error::Result;
use crate::nlp::Sentence;
use kgcompare_core::ExtractionMethod;
use regex::Regex;

/// Template and the canonical relation it yields
const TEMPLATES: &[(&str, &str)] = &[
    (
        r"(?i)(\w+(?:\s+\w+)*)\s+is\s+(?:(?:a|an|the)\b)?\s*(\w+(?:\s+\w+)*)",
        "is",
    ),
    (
        r"(?i)(\w+(?:\s+\w+)*)\s+was\s+(?:(?:a|an|the)\b)?\s*(\w+(?:\s+\w+)*)",
        "was",
    ),
    (r"(?i)(\w+(?:\s+\w+)*)\s+has\s+(\w+(?:\s+\w+)*)", "has"),
    (
        r"(?i)(\w+(?:\s+\w+)*)\s+located\s+in\s+(\w+(?:\s+\w+)*)",
        "located_in",
    ),
    (
        r"(?i)(\w+(?:\s+\w+)*)\s+born\s+in\s+(\w+(?:\s+\w+)*)",
        "born_in",
    ),
];

/// Shortest subject or object kept, in characters
const MIN_ARGUMENT_CHARS: usize = 3;

/// Matches "X is/was (a|an|the) Y", "X has Y", "X located in Y" and
/// "X born in Y" anywhere in the sentence text
#[derive(Debug, Clone)]
pub struct SurfacePatternStrategy {
    patterns: Vec<(Regex, &'static str)>,
}

impl SurfacePatternStrategy {
    pub fn new() -> Result<Self> {
        let patterns = TEMPLATES
            .iter()
            .map(|(pattern, relation)| Ok((Regex::new(pattern)?, *relation)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }
}

fn keep(subject: &str, object: &str) -> bool {
    subject.chars().count() >= MIN_ARGUMENT_CHARS
        && object.chars().count() >= MIN_ARGUMENT_CHARS
        && subject.to_lowercase() != object.to_lowercase()
}

impl ExtractionStrategy for SurfacePatternStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::SurfacePattern
    }

    fn extract(&self, sentence: &Sentence) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for (pattern, relation) in &self.patterns {
            for caps in pattern.captures_iter(&sentence.text) {
                let (Some(subject), Some(object)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let subject = subject.as_str().trim();
                let object = object.as_str().trim();
                if keep(subject, object) {
                    candidates.push(Candidate::new(subject, *relation, object));
                }
            }
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Pipeline;

    fn run(text: &str) -> Vec<(String, String, String)> {
        let sentence = Pipeline::new().parse_sentence(0, text);
        SurfacePatternStrategy::new()
            .unwrap()
            .extract(&sentence)
            .unwrap()
            .into_iter()
            .map(|c| (c.subject, c.predicate, c.object))
            .collect()
    }

    #[test]
    fn test_is_a_strips_article() {
        assert_eq!(
            run("The dog is a domesticated descendant of the wolf."),
            vec![(
                "The dog".to_string(),
                "is".to_string(),
                "domesticated descendant of the wolf".to_string()
            )]
        );
    }

    #[test]
    fn test_article_must_be_whole_word() {
        let found = run("Cattle milk is another product.");
        assert_eq!(found[0].2, "another product");
    }

    #[test]
    fn test_located_and_born() {
        let found = run("The museum located in Paris holds paintings.");
        assert!(found.contains(&(
            "The museum".to_string(),
            "located_in".to_string(),
            "Paris holds paintings".to_string()
        )));

        let found = run("Marie Curie was born in Warsaw.");
        assert!(found
            .iter()
            .any(|(_, relation, object)| relation == "born_in" && object == "Warsaw"));
        assert!(found.contains(&(
            "Marie Curie".to_string(),
            "was".to_string(),
            "born in Warsaw".to_string()
        )));
    }

    #[test]
    fn test_short_or_reflexive_arguments_dropped() {
        assert!(run("It is ok.").is_empty());
        assert!(run("Cattle is cattle.").is_empty());
    }

    #[test]
    fn test_case_insensitive_keyword() {
        let found = run("The herd HAS calves.");
        assert_eq!(
            found,
            vec![(
                "The herd".to_string(),
                "has".to_string(),
                "calves".to_string()
            )]
        );
    }
}
