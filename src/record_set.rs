//! An ordered collection of records and the field names that key them.

use std::ops::Index;

use serde::Serialize;

use crate::record::{FieldNames, Record};

/// All records parsed from one document, in input line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    field_names: FieldNames,
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a set from already-paired records.
    pub fn new(field_names: FieldNames, records: Vec<Record>) -> Self {
        Self {
            field_names,
            records,
        }
    }

    /// Field names from the header line, in header order.
    pub fn field_names(&self) -> &FieldNames {
        &self.field_names
    }

    /// Records as a slice, in input line order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Borrowing iterator over records in input line order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Values of one field across all records, in record order.
    ///
    /// Records truncated before `field` yield `None` at their position.
    pub fn column(&self, field: &str) -> Vec<Option<&str>> {
        self.records.iter().map(|r| r.get(field)).collect()
    }

    /// Consume the set, keeping only its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Index<usize> for RecordSet {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
