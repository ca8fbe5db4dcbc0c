//! End-to-end run: validate paths, scan, assemble, write

use crate::config::TransposeConfig;
use crate::error::Result;
use crate::report::TransposeSummary;
use crate::scanner::scan_directory;
use crate::table::OutputTable;
use crate::writer::write_table;
use chrono::Utc;
use std::env;
use std::path::Path;
use tracing::info;

/// Run a transpose with relative paths resolved against the working directory
pub fn transpose(config: &TransposeConfig) -> Result<TransposeSummary> {
    let cwd = env::current_dir()?;
    transpose_in(config, &cwd)
}

/// Run a transpose with relative paths resolved against `cwd`.
///
/// Nothing is written unless both directories exist.
pub fn transpose_in(config: &TransposeConfig, cwd: &Path) -> Result<TransposeSummary> {
    let paths = config.resolve(cwd)?;

    info!(
        "Transposing files in `{}` and saving to `{}`",
        paths.input_dir.display(),
        paths.output_path.display()
    );

    let scan = scan_directory(&paths.input_dir, config.fields())?;
    let table = OutputTable::assemble(&scan.records, &scan.keys);
    write_table(&table, &paths.output_path)?;

    info!(
        "Finished transposing and written to output file ({} rows, {} columns, {} skipped)",
        table.row_count(),
        table.column_count(),
        scan.skipped.len()
    );

    Ok(TransposeSummary {
        input_dir: paths.input_dir,
        output_path: paths.output_path,
        rows: table.row_count(),
        columns: table.columns,
        candidates: scan.candidates,
        skipped: scan.skipped,
        finished_at: Utc::now(),
    })
}
