//! Run configuration and path resolution

use crate::error::{Error, Result};
use crate::parser::FieldNames;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Default name of the field holding the column key
pub const DEFAULT_KEY_COLUMN: &str = "Name";

/// Default name of the field holding the cell value
pub const DEFAULT_VALUE_COLUMN: &str = "Value";

/// Extensions (lowercase) of files considered for transposing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Settings for a single transpose run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransposeConfig {
    /// Directory holding the input files
    pub input_dir: PathBuf,
    /// Directory the output file is written to
    pub output_dir: PathBuf,
    /// Output file name; derived from the input directory when None
    pub output_file: Option<String>,
    /// Field holding the column key on each input row
    pub key_column: String,
    /// Field holding the cell value on each input row
    pub value_column: String,
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            output_file: None,
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

/// Absolute, validated locations for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Normalised input directory
    pub input_dir: PathBuf,
    /// Full path of the file to write
    pub output_path: PathBuf,
}

impl TransposeConfig {
    /// Create a config for the given directories with default field names
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Field names used when parsing input files
    pub fn fields(&self) -> FieldNames<'_> {
        FieldNames {
            key: &self.key_column,
            value: &self.value_column,
        }
    }

    /// Resolve paths against `cwd` and check both directories exist.
    ///
    /// The input directory is checked first.
    pub fn resolve(&self, cwd: &Path) -> Result<ResolvedPaths> {
        let input_dir = absolute(cwd, &self.input_dir);
        if !input_dir.is_dir() {
            return Err(Error::InputDirectory(input_dir));
        }

        let output_dir = absolute(cwd, &self.output_dir);
        if !output_dir.is_dir() {
            return Err(Error::OutputDirectory(output_dir));
        }

        let file_name = match &self.output_file {
            Some(name) if !name.is_empty() => name.clone(),
            _ => default_output_name(&input_dir),
        };

        Ok(ResolvedPaths {
            output_path: normalize(&output_dir.join(file_name)),
            input_dir,
        })
    }
}

/// `<input dir name>.csv`
fn default_output_name(input_dir: &Path) -> String {
    let stem = input_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.csv", stem)
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Lexically normalise a path: drop `.` components and fold `..` into its parent
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
