//! Parser turning one tab-delimited key/value file into a FileRecord

use crate::encoding::decode_utf16;
use crate::error::{Error, Result};
use crate::table::FileRecord;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Names of the fields holding the column key and the cell value
#[derive(Debug, Clone, Copy)]
pub struct FieldNames<'a> {
    /// Field whose value becomes the output column name
    pub key: &'a str,
    /// Field whose value becomes the output cell
    pub value: &'a str,
}

/// Read, decode and parse a UTF-16 file into a FileRecord
pub fn parse_record<P: AsRef<Path>>(path: P, fields: FieldNames<'_>) -> Result<FileRecord> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = decode_utf16(&bytes).ok_or_else(|| Error::Decode {
        path: path.to_path_buf(),
    })?;

    parse_record_str(&content, path, fields)
}

/// Parse already-decoded text into a FileRecord
pub fn parse_record_str<P: AsRef<Path>>(
    content: &str,
    source: P,
    fields: FieldNames<'_>,
) -> Result<FileRecord> {
    let path = source.as_ref().to_path_buf();
    let pairs = read_pairs(content, &path, fields)?;

    let mut record = FileRecord::new(path);
    for (key, value) in pairs {
        if record.values.contains_key(&key) {
            return Err(Error::DuplicateKey {
                path: record.source_path,
                key,
            });
        }
        record.values.insert(key, value);
    }

    Ok(record)
}

/// Extract the (key, value) pair of every data row, in file order.
///
/// Fails on the first row lacking either field.
fn read_pairs(content: &str, path: &Path, fields: FieldNames<'_>) -> Result<Vec<(String, String)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true) // Short rows just lack trailing fields
        .from_reader(content.as_bytes());

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut pairs = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Later duplicates of a header name win; cells past the header are dropped
        let row: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter().map(str::trim))
            .collect();

        let key = lookup(&row, fields.key, path)?;
        let value = lookup(&row, fields.value, path)?;
        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(pairs)
}

fn lookup<'r>(row: &HashMap<&str, &'r str>, field: &str, path: &Path) -> Result<&'r str> {
    row.get(field).copied().ok_or_else(|| Error::MissingField {
        path: path.to_path_buf(),
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const FIELDS: FieldNames<'static> = FieldNames {
        key: "Name",
        value: "Value",
    };

    #[test]
    fn test_parse_simple_file() {
        let tsv = "Name\tValue\nx\t1\ny\t2\n";
        let record = parse_record_str(tsv, "a.csv", FIELDS).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("x"), Some("1"));
        assert_eq!(record.get("y"), Some("2"));
        assert_eq!(record.source_path, PathBuf::from("a.csv"));
    }

    #[test]
    fn test_parse_strips_whitespace() {
        let tsv = " Name \t Value\r\n  x \t 1  \r\n";
        let record = parse_record_str(tsv, "a.csv", FIELDS).unwrap();

        assert_eq!(record.get("x"), Some("1"));
    }

    #[test]
    fn test_parse_ignores_other_fields() {
        let tsv = "Id\tName\tUnit\tValue\n7\tspeed\tkm/h\t90\n";
        let record = parse_record_str(tsv, "a.csv", FIELDS).unwrap();

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("speed"), Some("90"));
    }

    #[test]
    fn test_parse_custom_field_names() {
        let tsv = "Metric\tReading\ntemp\t21\n";
        let fields = FieldNames {
            key: "Metric",
            value: "Reading",
        };
        let record = parse_record_str(tsv, "a.csv", fields).unwrap();

        assert_eq!(record.get("temp"), Some("21"));
    }

    #[test]
    fn test_parse_missing_key_field() {
        let tsv = "Label\tValue\nx\t1\n";
        let err = parse_record_str(tsv, "a.csv", FIELDS).unwrap_err();

        match err {
            Error::MissingField { field, .. } => assert_eq!(field, "Name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_missing_value_field() {
        let tsv = "Name\tAmount\nx\t1\n";
        let err = parse_record_str(tsv, "a.csv", FIELDS).unwrap_err();

        match err {
            Error::MissingField { field, .. } => assert_eq!(field, "Value"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_short_row_missing_value() {
        let tsv = "Name\tValue\nx\t1\ny\n";
        let err = parse_record_str(tsv, "a.csv", FIELDS).unwrap_err();

        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn test_parse_duplicate_key() {
        let tsv = "Name\tValue\nx\t1\nx\t2\n";
        let err = parse_record_str(tsv, "a.csv", FIELDS).unwrap_err();

        match err {
            Error::DuplicateKey { key, .. } => assert_eq!(key, "x"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_duplicate_after_trimming() {
        let tsv = "Name\tValue\nx\t1\n x \t2\n";
        let err = parse_record_str(tsv, "a.csv", FIELDS).unwrap_err();

        assert!(matches!(err, Error::DuplicateKey { .. }));
    }

    #[test]
    fn test_missing_field_reported_before_duplicates() {
        let tsv = "Name\tValue\nx\t1\nx\t2\ny\n";
        let err = parse_record_str(tsv, "a.csv", FIELDS).unwrap_err();

        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn test_parse_header_only() {
        let record = parse_record_str("Name\tValue\n", "a.csv", FIELDS).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_parse_quoted_value() {
        let tsv = "Name\tValue\nnote\t\"a\tb\"\n";
        let record = parse_record_str(tsv, "a.csv", FIELDS).unwrap();

        assert_eq!(record.get("note"), Some("a\tb"));
    }

    #[test]
    fn test_parse_record_from_utf16_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, crate::encoding::encode_utf16le("Name\tValue\r\nx\t1\r\n")).unwrap();

        let record = parse_record(&path, FIELDS).unwrap();
        assert_eq!(record.get("x"), Some("1"));
    }

    #[test]
    fn test_parse_record_rejects_odd_length_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.csv");
        // 15 bytes cannot be whole UTF-16 code units
        fs::write(&path, b"Name\tValue\nx\t1\n").unwrap();

        let err = parse_record(&path, FIELDS).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_parse_record_even_length_utf8_reads_as_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.csv");
        // 16 bytes of UTF-8 decode to one header field with no tabs or newlines
        fs::write(&path, b"Name\tValue\nx\t1\n\n").unwrap();

        let record = parse_record(&path, FIELDS).unwrap();
        assert!(record.is_empty());
    }
}
