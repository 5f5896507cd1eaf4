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

//! Errors that abort an analysis

use kgcompare_core::KgError;
use kgcompare_extract::ExtractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Unreadable input or invalid configuration
    #[error(transparent)]
    Input(#[from] KgError),

    #[error("Failed to build triple extractor: {0}")]
    Extractor(#[from] ExtractError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
