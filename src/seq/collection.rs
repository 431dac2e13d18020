// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use crate::seq::record::SequenceRecord;

// For our purposes, a sequence file is a map from identifier to record that remembers the order
// in which identifiers were first seen. A record whose identifier is already present replaces the
// earlier one in place (last write wins, first position kept).

#[derive(Debug, Default, Clone)]
pub struct RecordCollection {
    records: Vec<SequenceRecord>,
    index: HashMap<String, usize>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, returning the record it replaced, if any.
    pub fn insert(&mut self, record: SequenceRecord) -> Option<SequenceRecord> {
        match self.index.get(&record.identifier) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.index
                    .insert(record.identifier.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&SequenceRecord> {
        self.index.get(identifier).map(|&i| &self.records[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.identifier.as_str())
    }
}

impl FromIterator<SequenceRecord> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = SequenceRecord>>(iter: I) -> Self {
        let mut collection = RecordCollection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}

impl IntoIterator for RecordCollection {
    type Item = SequenceRecord;
    type IntoIter = std::vec::IntoIter<SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
