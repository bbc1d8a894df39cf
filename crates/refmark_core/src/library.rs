/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Record storage and id assignment.

use indexmap::IndexMap;

use crate::record::CitationRecord;

/// Insertion-ordered record store.
///
/// The library owns id assignment: ids are `ref` plus a zero-padded counter
/// ("ref001"), handed out once and never reused, even after deletion.
#[derive(Debug, Clone)]
pub struct Library {
    records: IndexMap<String, CitationRecord>,
    next_id: u32,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a library from persisted records, keeping their ids.
    ///
    /// The first record wins on a duplicate id. The counter resumes one past
    /// the highest numeric `refNNN` suffix present, so later additions never
    /// collide with loaded ids.
    pub fn from_records(records: Vec<CitationRecord>) -> Self {
        let mut map = IndexMap::new();
        for record in records {
            map.entry(record.id.clone()).or_insert(record);
        }

        let next_id = map
            .keys()
            .filter_map(|id| id.strip_prefix("ref"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .map_or(1, |highest| highest + 1);

        Self {
            records: map,
            next_id,
        }
    }

    /// Store a record under a freshly assigned id and return the id.
    pub fn add(&mut self, mut record: CitationRecord) -> String {
        let id = format!("ref{:03}", self.next_id);
        self.next_id += 1;
        record.id = id.clone();
        self.records.insert(id.clone(), record);
        id
    }

    /// Store an empty record for later manual editing.
    pub fn add_empty(&mut self) -> String {
        self.add(CitationRecord::default())
    }

    pub fn get(&self, id: &str) -> Option<&CitationRecord> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut CitationRecord> {
        self.records.get_mut(id)
    }

    /// Remove a record, preserving the order of the remaining ones. The id
    /// is retired, not recycled.
    pub fn remove(&mut self, id: &str) -> Option<CitationRecord> {
        self.records.shift_remove(id)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CitationRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
