//! Core table types: per-file records and the assembled wide table

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Key/value pairs read from a single input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileRecord {
    /// Source file path
    pub source_path: PathBuf,
    /// Column key -> cell value
    pub values: BTreeMap<String, String>,
}

impl FileRecord {
    /// Create a new empty record
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            source_path,
            values: BTreeMap::new(),
        }
    }

    /// Get the value stored under a column key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate over the column keys of this record
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of key/value pairs
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record holds no pairs
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The pivoted table: one row per record, one column per observed key
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    /// Column names, sorted by code point
    pub columns: Vec<String>,
    /// Row data; every row has exactly one cell per column
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    /// Build the table from validated records and the union of their keys.
    ///
    /// Cells a record has no value for are filled with an empty string.
    pub fn assemble(records: &[FileRecord], keys: &BTreeSet<String>) -> Self {
        // BTreeSet iterates in code-point order for String keys
        let columns: Vec<String> = keys.iter().cloned().collect();

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|col| record.get(col).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
