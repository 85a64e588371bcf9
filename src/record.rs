//! Field names and the records keyed by them.

use std::collections::HashMap;
use std::ops::Index;

use serde::Serialize;

/// Ordered field names taken from a document's header line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldNames(Vec<String>);

impl FieldNames {
    /// Split a header line on `separator`.
    pub(crate) fn from_header(header: &str, separator: &str, trim: bool) -> Self {
        Self(split_cells(header, separator, trim))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Pair these names with `cells` into a record.
    ///
    /// Pairing stops at the shorter of the two sequences, so missing cells
    /// leave their field absent and surplus cells are dropped.
    pub(crate) fn zip_record<I>(&self, cells: I) -> Record
    where
        I: IntoIterator<Item = String>,
    {
        self.0.iter().cloned().zip(cells).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl PartialEq<[&str]> for FieldNames {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for FieldNames {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

/// One data line, keyed by field name.
///
/// Key order carries no meaning; two records are equal when they hold the
/// same name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    cells: HashMap<String, String>,
}

impl Record {
    /// Look up the cell for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells.get(field).map(String::as_str)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.cells.contains_key(field)
    }

    /// Number of fields present in this record.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Index<&str> for Record {
    type Output = str;

    /// Panics if `field` is not present, like `HashMap` indexing.
    fn index(&self, field: &str) -> &str {
        match self.cells.get(field) {
            Some(value) => value.as_str(),
            None => panic!("no field named {field:?} in record"),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Split a line on a literal separator. No quoting or escaping is applied.
pub(crate) fn split_cells(line: &str, separator: &str, trim: bool) -> Vec<String> {
    line.split(separator)
        .map(|cell| if trim { cell.trim() } else { cell })
        .map(str::to_string)
        .collect()
}
