// ReportConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::path::PathBuf;

/// Output file name used when none is given on the command line.
pub const DEFAULT_FILENAME: &str = "bucket-data";

/// Maximum number of buckets described at the same time.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Extension appended to every report file name.
const EXTENSION: &str = "csv";

/// Report configuration.
#[derive(Debug, Eq, PartialEq)]
pub struct ReportConfig {
    /// Path the CSV report is written to.
    pub output: PathBuf,

    /// Maximum number of buckets described at the same time.
    pub concurrency: usize,
}

impl ReportConfig {
    /// Returns a `ReportConfig` writing to `filename` with the `.csv`
    /// extension appended.
    ///
    /// The extension is always appended, so `report.csv` is written as
    /// `report.csv.csv`.
    pub fn with_filename(filename: &str) -> Self {
        let output = PathBuf::from(format!("{filename}.{EXTENSION}"));

        Self {
            output,
            ..Default::default()
        }
    }
}

impl Default for ReportConfig {
    /// Returns a default `ReportConfig`.
    ///
    /// ```text
    /// ReportConfig {
    ///     output:      PathBuf::from("bucket-data.csv"),
    ///     concurrency: DEFAULT_CONCURRENCY,
    /// }
    /// ```
    fn default() -> Self {
        Self {
            output:      PathBuf::from(format!("{DEFAULT_FILENAME}.{EXTENSION}")),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
