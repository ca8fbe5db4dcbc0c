//! csv-transpose CLI
//!
//! Transposes a directory of key/value CSV files into a single output file.

use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use transpose_core::{transpose, TransposeConfig, DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN};

#[derive(Parser)]
#[command(name = "csv-transpose")]
#[command(about = "Transpose a directory of CSV files into a single output file", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing the .csv/.txt files to transpose
    input_directory: PathBuf,

    /// Directory to write the output file to
    output_directory: PathBuf,

    /// Output file name (defaults to `<input directory name>.csv`)
    #[arg(long = "output_file", alias = "output-file")]
    output_file: Option<String>,

    /// Field holding the output column name on each input row
    #[arg(long, default_value = DEFAULT_KEY_COLUMN)]
    col: String,

    /// Field holding the output cell value on each input row
    #[arg(long, default_value = DEFAULT_VALUE_COLUMN)]
    row: String,

    /// Also write a JSON summary of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> TransposeConfig {
        TransposeConfig {
            input_dir: self.input_directory.clone(),
            output_dir: self.output_directory.clone(),
            output_file: self.output_file.clone(),
            key_column: self.col.clone(),
            value_column: self.row.clone(),
        }
    }

    fn default_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_filter()));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> transpose_core::Result<()> {
    let summary = transpose(&cli.config())?;

    if let Some(report) = &cli.report {
        summary.save(report)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["csv-transpose", "in", "out"]).unwrap();
        let config = cli.config();

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.output_file, None);
        assert_eq!(config.key_column, "Name");
        assert_eq!(config.value_column, "Value");
        assert_eq!(cli.default_filter(), "info");
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "csv-transpose",
            "in",
            "out",
            "--output_file",
            "wide.csv",
            "--col",
            "Metric",
            "--row",
            "Reading",
            "-q",
        ])
        .unwrap();
        let config = cli.config();

        assert_eq!(config.output_file.as_deref(), Some("wide.csv"));
        assert_eq!(config.key_column, "Metric");
        assert_eq!(config.value_column, "Reading");
        assert_eq!(cli.default_filter(), "warn");
    }

    #[test]
    fn test_output_file_dash_alias() {
        let cli =
            Cli::try_parse_from(["csv-transpose", "in", "out", "--output-file", "x.csv"]).unwrap();
        assert_eq!(cli.output_file.as_deref(), Some("x.csv"));
    }

    #[test]
    fn test_requires_both_directories() {
        assert!(Cli::try_parse_from(["csv-transpose", "in"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["csv-transpose", "in", "out", "-q", "-v"]).is_err());
    }
}
