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

//! N-Triples export
//!
//! Renders extracted triples as RDF with schema.org predicate mappings and
//! a provenance node per assertion. Output is a flat `.nt` document, not a
//! queryable store.

use crate::triple::Triple;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;
use std::io::Write;

pub const KG_NS: &str = "http://example.org/kg/";
pub const SCHEMA_NS: &str = "http://schema.org/";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
pub const PROV_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("Invalid slug regex pattern"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid slug regex pattern"));

/// URI-safe local name: lowercase, punctuation dropped, spaces to `_`
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    SEPARATOR_RE
        .replace_all(stripped.trim(), "_")
        .into_owned()
}

/// Map a predicate string onto a well-known vocabulary IRI
pub fn predicate_iri(predicate: &str) -> String {
    let p = predicate.trim().to_lowercase();
    let mapped = match p.as_str() {
        "is" | "was" | "be" => Some(RDFS_SUBCLASS_OF.to_string()),
        "has" | "has_part" => Some(format!("{}hasPart", SCHEMA_NS)),
        "located_in" => Some(format!("{}location", SCHEMA_NS)),
        "born_in" => Some(format!("{}birthPlace", SCHEMA_NS)),
        "part_of" => Some(format!("{}partOf", SCHEMA_NS)),
        _ => None,
    };
    if let Some(iri) = mapped {
        return iri;
    }

    if p.contains("location") || p.contains("place") {
        format!("{}location", SCHEMA_NS)
    } else if p.contains("date") || p.contains("time") {
        format!("{}temporalCoverage", SCHEMA_NS)
    } else if p.contains("name") {
        format!("{}name", SCHEMA_NS)
    } else if p.contains("type") || p.contains("kind") {
        RDF_TYPE.to_string()
    } else {
        format!("{}{}", KG_NS, slugify(&p))
    }
}

fn resource_iri(name: &str) -> String {
    format!("{}{}", KG_NS, slugify(name))
}

/// Escape a string for an N-Triples literal
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes triples as N-Triples statements
pub struct NTriplesWriter {
    source_label: String,
    with_provenance: bool,
}

impl NTriplesWriter {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            with_provenance: true,
        }
    }

    /// Disable the per-assertion provenance nodes
    pub fn without_provenance(mut self) -> Self {
        self.with_provenance = false;
        self
    }

    /// Render triples to a string. Triples with an empty slug on either
    /// side are skipped.
    pub fn render(&self, triples: &[Triple]) -> String {
        let mut out = String::new();
        let source_iri = resource_iri(&self.source_label);
        let mut prov_id = 0usize;

        for triple in triples {
            let subject_slug = slugify(&triple.subject);
            let object_slug = slugify(&triple.object);
            if subject_slug.is_empty() || object_slug.is_empty() {
                continue;
            }
            let subject = format!("{}{}", KG_NS, subject_slug);
            let object = format!("{}{}", KG_NS, object_slug);
            let predicate = predicate_iri(&triple.predicate);

            let _ = writeln!(out, "<{}> <{}> <{}> .", subject, predicate, object);
            let _ = writeln!(
                out,
                "<{}> <{}> \"{}\" .",
                subject,
                RDFS_LABEL,
                escape_literal(&triple.subject)
            );
            let _ = writeln!(
                out,
                "<{}> <{}> \"{}\" .",
                object,
                RDFS_LABEL,
                escape_literal(&triple.object)
            );

            if self.with_provenance {
                let prov = format!("{}prov_{}", KG_NS, prov_id);
                prov_id += 1;
                let _ = writeln!(out, "<{}> <{}> <{}> .", prov, PROV_DERIVED_FROM, source_iri);
                let _ = writeln!(
                    out,
                    "<{}> <{}extractionMethod> \"{}\" .",
                    prov,
                    KG_NS,
                    triple.extraction_method.as_str()
                );
                let _ = writeln!(
                    out,
                    "<{}> <{}hasCitation> \"{}\"^^<{}> .",
                    prov, KG_NS, triple.has_citation, XSD_BOOLEAN
                );
                let _ = writeln!(
                    out,
                    "<{}> <{}assertsSubject> <{}> .",
                    prov, KG_NS, subject
                );
            }
        }
        out
    }

    /// Render into any writer
    pub fn write_to<W: Write>(&self, triples: &[Triple], mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.render(triples).as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::{ExtractionMethod, SourceTag};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Labrador Retriever"), "labrador_retriever");
        assert_eq!(slugify("St. John's - Newfoundland"), "st_johns_newfoundland");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_predicate_mapping() {
        assert_eq!(predicate_iri("be"), RDFS_SUBCLASS_OF);
        assert_eq!(predicate_iri("has_part"), "http://schema.org/hasPart");
        assert_eq!(predicate_iri("born_in"), "http://schema.org/birthPlace");
        assert_eq!(predicate_iri("birth place"), "http://schema.org/location");
        assert_eq!(predicate_iri("eat"), "http://example.org/kg/eat");
    }

    #[test]
    fn test_render_with_provenance() {
        let triples = vec![
            Triple::new("Cattle", "be", "herbivore", SourceTag::A, ExtractionMethod::Dependency)
                .with_citation(true),
            Triple::new("???", "be", "nothing", SourceTag::A, ExtractionMethod::Dependency),
        ];
        let nt = NTriplesWriter::new("wikipedia").render(&triples);
        assert!(nt.contains(
            "<http://example.org/kg/cattle> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.org/kg/herbivore> ."
        ));
        assert!(nt.contains("\"Cattle\""));
        assert!(nt.contains("<http://example.org/kg/prov_0>"));
        assert!(nt.contains("\"true\"^^"));
        assert!(!nt.contains("prov_1"));
        assert!(nt.lines().all(|l| l.ends_with(" .")));
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("say \"hi\"\n"), "say \\\"hi\\\"\\n");
    }
}
