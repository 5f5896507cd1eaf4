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

//! Triple and related types
//!
//! A triple is a (subject, predicate, object) assertion mined from one
//! sentence of one source document. Triples are produced by the extractor
//! and only read afterwards.

use crate::normalize::{normalize, NormalizedKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared documents a triple came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceTag {
    #[serde(rename = "source_a")]
    A,
    #[serde(rename = "source_b")]
    B,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::A => "source_a",
            SourceTag::B => "source_b",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" | "source_a" => Some(SourceTag::A),
            "b" | "source_b" => Some(SourceTag::B),
            _ => None,
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy that produced a triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Subject/verb/object from the dependency parse
    Dependency,
    /// Regular-expression templates over the raw sentence
    SurfacePattern,
    /// Text between two named entities
    EntityPair,
    /// "X of Y" noun phrases
    Nominal,
}

impl ExtractionMethod {
    pub const ALL: [ExtractionMethod; 4] = [
        ExtractionMethod::Dependency,
        ExtractionMethod::SurfacePattern,
        ExtractionMethod::EntityPair,
        ExtractionMethod::Nominal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::Dependency => "dependency",
            ExtractionMethod::SurfacePattern => "surface_pattern",
            ExtractionMethod::EntityPair => "entity_pair",
            ExtractionMethod::Nominal => "nominal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "dependency" | "dependency_parsing" | "svo" => Some(ExtractionMethod::Dependency),
            "surface_pattern" | "openie" | "openie_pattern" => {
                Some(ExtractionMethod::SurfacePattern)
            }
            "entity_pair" | "entity_relation" => Some(ExtractionMethod::EntityPair),
            "nominal" | "nominal_relation" => Some(ExtractionMethod::Nominal),
            _ => None,
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named-entity label attached to entity-pair triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Org,
    /// Countries, cities, states
    Gpe,
    Date,
    Cardinal,
    /// Nationalities, religious or political groups
    Norp,
    Event,
    WorkOfArt,
    Misc,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Date => "DATE",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Norp => "NORP",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Misc => "MISC",
        }
    }
}

/// A (subject, predicate, object) assertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    /// Document the triple was extracted from
    pub source: SourceTag,
    /// Full sentence the triple was extracted from
    pub sentence: String,
    /// Whether the sentence carries a citation marker
    pub has_citation: bool,
    pub extraction_method: ExtractionMethod,
    /// Entity label of the subject (entity-pair triples only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<EntityLabel>,
    /// Entity label of the object (entity-pair triples only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<EntityLabel>,
}

impl Triple {
    /// Create a new triple with an empty sentence and no citation
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
        source: SourceTag,
        extraction_method: ExtractionMethod,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            source,
            sentence: String::new(),
            has_citation: false,
            extraction_method,
            subject_type: None,
            object_type: None,
        }
    }

    /// Set the originating sentence
    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = sentence.into();
        self
    }

    /// Set the citation flag
    pub fn with_citation(mut self, has_citation: bool) -> Self {
        self.has_citation = has_citation;
        self
    }

    /// Set entity labels for subject and object
    pub fn with_types(mut self, subject_type: EntityLabel, object_type: EntityLabel) -> Self {
        self.subject_type = Some(subject_type);
        self.object_type = Some(object_type);
        self
    }

    /// Verbatim `subject|predicate|object` key
    pub fn exact_key(&self) -> String {
        format!("{}|{}|{}", self.subject, self.predicate, self.object)
    }

    /// Normalized `subject|predicate|object` key
    pub fn fuzzy_key(&self) -> String {
        format!(
            "{}|{}|{}",
            normalize(&self.subject),
            normalize(&self.predicate),
            normalize(&self.object)
        )
    }

    pub fn normalized(&self) -> NormalizedKey {
        NormalizedKey::new(&self.subject, &self.predicate, &self.object)
    }

    /// Text fed to sentence encoders: `subject predicate object`
    pub fn embedding_text(&self) -> String {
        format!("{} {} {}", self.subject, self.predicate, self.object)
    }

    /// `predicate:object` relation string used for entity coherence
    pub fn relation_key(&self) -> String {
        format!("{}:{}", self.predicate, self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let t = Triple::new(
            "The  Cattle",
            "be",
            "Herbivore",
            SourceTag::A,
            ExtractionMethod::Dependency,
        );
        assert_eq!(t.exact_key(), "The  Cattle|be|Herbivore");
        assert_eq!(t.fuzzy_key(), "the cattle|be|herbivore");
        assert_eq!(t.embedding_text(), "The  Cattle be Herbivore");
        assert_eq!(t.relation_key(), "be:Herbivore");
    }

    #[test]
    fn test_serialization_shape() {
        let t = Triple::new("Paris", "capital of", "France", SourceTag::B, ExtractionMethod::EntityPair)
            .with_sentence("Paris is the capital of France.")
            .with_types(EntityLabel::Gpe, EntityLabel::Gpe);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["source"], "source_b");
        assert_eq!(json["extraction_method"], "entity_pair");
        assert_eq!(json["subject_type"], "GPE");
        assert_eq!(json["has_citation"], false);

        let plain = Triple::new("a", "b", "c", SourceTag::A, ExtractionMethod::Nominal);
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("subject_type").is_none());
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(ExtractionMethod::from_str("openie_pattern"), Some(ExtractionMethod::SurfacePattern));
        assert_eq!(ExtractionMethod::from_str("Entity-Pair"), Some(ExtractionMethod::EntityPair));
        assert_eq!(ExtractionMethod::from_str("bogus"), None);
        assert_eq!(SourceTag::from_str("B"), Some(SourceTag::B));
    }
}
