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

//! kgcompare extraction
//!
//! Turns document text into knowledge-graph triples. A deterministic,
//! rule-based English pipeline ([`nlp`]) annotates each sentence, four
//! independent [`strategies`] mine assertions from the annotations and
//! [`TripleExtractor`] stitches them together with citation flags.

pub mod citation;
pub mod error;
pub mod extractor;
pub mod nlp;
pub mod strategies;

pub use citation::CitationDetector;
pub use error::{ExtractError, Result};
pub use extractor::{ExtractorConfig, TripleExtractor};
pub use nlp::{Pipeline, Sentence};
pub use strategies::{
    Candidate, DependencyStrategy, EntityPairStrategy, ExtractionStrategy, NominalStrategy,
    SurfacePatternStrategy,
};
