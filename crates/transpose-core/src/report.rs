//! Summary of a completed run, optionally saved as JSON

use crate::error::{Error, Result};
use crate::scanner::SkippedFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a transpose run read and wrote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransposeSummary {
    /// Directory the input files were read from
    pub input_dir: PathBuf,
    /// File the table was written to
    pub output_path: PathBuf,
    /// Output columns, in written order
    pub columns: Vec<String>,
    /// Number of data rows written
    pub rows: usize,
    /// Number of files with a supported extension
    pub candidates: usize,
    /// Files rejected during the scan
    pub skipped: Vec<SkippedFile>,
    /// When the output file was finished
    pub finished_at: DateTime<Utc>,
}

impl TransposeSummary {
    /// Load a summary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the summary as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
