//! Writer for the assembled table: tab-delimited, UTF-16LE with BOM

use crate::encoding::encode_utf16le;
use crate::error::{Error, Result};
use crate::table::OutputTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render the table as tab-delimited text with a header row
pub fn render_table(table: &OutputTable) -> csv::Result<String> {
    // The csv writer quotes an empty record as `""`; with no columns every line is bare
    if table.columns.is_empty() {
        return Ok("\r\n".repeat(table.rows.len() + 1));
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    csv_writer.write_record(&table.columns)?;
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    // Every field came from a `String`, so this never replaces anything
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the table to `path`, replacing any existing file
pub fn write_table<P: AsRef<Path>>(table: &OutputTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = render_table(table).map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_err = |e: std::io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&encode_utf16le(&text))
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
