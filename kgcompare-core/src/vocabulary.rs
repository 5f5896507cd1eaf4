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

//! Interned name table
//!
//! Assigns dense integer ids to strings in first-seen order. Backs the
//! entity and relation vocabularies of the graph embedding model.

use std::collections::HashMap;

/// Dense id assigned by a [`Vocabulary`]
pub type SymbolId = u32;

/// Arena of names with stable, insertion-ordered ids
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashMap<String, SymbolId>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, inserting it if unseen
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len() as SymbolId;
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in id order
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (i as SymbolId, n.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_ids() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.intern("cattle"), 0);
        assert_eq!(vocab.intern("herbivore"), 1);
        assert_eq!(vocab.intern("cattle"), 0);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.name(1), Some("herbivore"));
        assert_eq!(vocab.get("omnivore"), None);

        let names: Vec<_> = vocab.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["cattle", "herbivore"]);
    }
}
