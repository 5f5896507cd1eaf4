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

//! Error types for triple extraction

use thiserror::Error;

/// Extraction errors.
///
/// Sentence-level failures are recovered inside [`crate::TripleExtractor`]
/// and never reach the caller of `extract`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Sentence {index} could not be processed: {reason}")]
    Sentence { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
