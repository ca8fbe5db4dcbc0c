//! transpose-core: pivot a directory of key/value tables into one wide table
//!
//! This library provides functionality to:
//! - Scan a directory for `.csv`/`.txt` files (tab-delimited, UTF-16)
//! - Parse each file into a key -> value record, rejecting malformed files
//! - Union the keys of all records into a sorted column list
//! - Write one row per record to a single tab-delimited UTF-16 file

pub mod config;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod table;
pub mod transpose;
pub mod writer;

pub use config::{ResolvedPaths, TransposeConfig, DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN};
pub use error::{Error, Result};
pub use parser::{parse_record, parse_record_str, FieldNames};
pub use report::TransposeSummary;
pub use scanner::{scan_directory, ScanResult, SkippedFile};
pub use table::{FileRecord, OutputTable};
pub use transpose::{transpose, transpose_in};
pub use writer::{render_table, write_table};
