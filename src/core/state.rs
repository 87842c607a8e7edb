//! The alias table persisted between invocations.
//!
//! This module defines the core data structures for the numbering pipeline.
//! An [`Entry`] pairs a 1-based index with the filename it stands for; an
//! [`AliasTable`] is the ordered run of entries produced by one status
//! query. Indices are assigned by the table itself, so a table is contiguous
//! `1..N` by construction, and deserialization rejects anything else.
//!
//! # Cache format
//! A table serializes as a JSON array of `[index, filename]` pairs, in
//! insertion order. The tuple shape is the on-disk contract, not an
//! implementation detail.
//!
//! # Public API
//! - [`Entry`]: One (index, filename) pair, immutable once created
//! - [`AliasTable`]: Ordered collection with append and 1-based lookup

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(usize, String)", from = "(usize, String)")]
pub struct Entry {
    index: usize,
    filename: String,
}

impl Entry {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl From<Entry> for (usize, String) {
    fn from(entry: Entry) -> Self {
        (entry.index, entry.filename)
    }
}

impl From<(usize, String)> for Entry {
    fn from((index, filename): (usize, String)) -> Self {
        Entry { index, filename }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Entry>", try_from = "Vec<Entry>")]
pub struct AliasTable {
    entries: Vec<Entry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filename and returns the index assigned to it. Indices are
    /// handed out sequentially starting at 1.
    pub fn push(&mut self, filename: impl Into<String>) -> usize {
        let index = self.entries.len() + 1;
        self.entries.push(Entry {
            index,
            filename: filename.into(),
        });
        index
    }

    /// Looks up a filename by its 1-based index.
    pub fn get(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.entries.get(index - 1).map(|entry| entry.filename())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl From<AliasTable> for Vec<Entry> {
    fn from(table: AliasTable) -> Self {
        table.entries
    }
}

impl TryFrom<Vec<Entry>> for AliasTable {
    type Error = String;

    /// Accepts only an exact `1..N` index run in order. Anything else is a
    /// corrupt cache, which the store layer maps to an empty table.
    fn try_from(entries: Vec<Entry>) -> Result<Self, Self::Error> {
        for (position, entry) in entries.iter().enumerate() {
            if entry.index != position + 1 {
                return Err(format!(
                    "non-contiguous index {} at position {}",
                    entry.index,
                    position + 1
                ));
            }
        }
        Ok(AliasTable { entries })
    }
}
