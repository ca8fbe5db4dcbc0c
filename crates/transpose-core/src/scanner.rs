//! Directory scanner: discovers input files and folds them into records

use crate::config::SUPPORTED_EXTENSIONS;
use crate::error::Result;
use crate::parser::{parse_record, FieldNames};
use crate::table::FileRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A candidate file that was rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Why it was rejected
    pub reason: String,
}

/// Result of scanning a directory
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Valid records, in scan order
    pub records: Vec<FileRecord>,
    /// Union of the keys of all valid records
    pub keys: BTreeSet<String>,
    /// Candidate files that were rejected
    pub skipped: Vec<SkippedFile>,
    /// Number of files with a supported extension
    pub candidates: usize,
}

impl ScanResult {
    /// Add a valid record, merging its keys into the key set
    fn accept(mut self, record: FileRecord) -> Self {
        self.keys.extend(record.keys().map(str::to_string));
        self.records.push(record);
        self
    }

    fn reject(mut self, path: PathBuf, reason: String) -> Self {
        self.skipped.push(SkippedFile { path, reason });
        self
    }
}

/// Scan a directory (non-recursively) and parse every supported file.
///
/// Files that fail to parse are logged and listed in `skipped`; only a
/// failure to read the directory itself, or another run-level error, is
/// returned.
pub fn scan_directory<P: AsRef<Path>>(root: P, fields: FieldNames<'_>) -> Result<ScanResult> {
    let files = candidate_files(root.as_ref())?;

    files.into_iter().try_fold(ScanResult::default(), |acc, path| {
        let acc = ScanResult {
            candidates: acc.candidates + 1,
            ..acc
        };

        info!("\tTransposing: `{}`", display_name(&path));
        match parse_record(&path, fields) {
            Ok(record) => Ok(acc.accept(record)),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("{}", e);
                Ok(acc.reject(path, e.to_string()))
            }
        }
    })
}

/// List files directly inside `root` with a supported extension, by file name
pub fn candidate_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if is_supported(path) {
            files.push(path.to_path_buf());
        } else {
            debug!("ignoring `{}`", display_name(path));
        }
    }

    Ok(files)
}

/// Check the extension against the supported list, ignoring case
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
