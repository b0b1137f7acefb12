// Error taxonomy for a report run
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors encountered while producing a bucket report.
///
/// Descriptor lookups that are interpreted as "not configured" never produce
/// one of these.
#[derive(Debug, Error)]
pub enum ReportError {
    /// AWS configuration or credentials couldn't be resolved.
    #[error("failed to load AWS configuration: {0}")]
    Config(String),

    /// Listing buckets failed.
    #[error("failed to list buckets")]
    Enumeration(#[source] aws_sdk_s3::Error),

    /// Resolving the region of a bucket failed.
    #[error("failed to locate bucket '{bucket}'")]
    Locate {
        /// Bucket that couldn't be located.
        bucket: String,

        /// Underlying SDK error.
        #[source]
        source: aws_sdk_s3::Error,
    },

    /// A descriptor query treated as fatal failed.
    #[error("failed to get {operation} for bucket '{bucket}'")]
    Describe {
        /// Bucket being described.
        bucket: String,

        /// Descriptor that was being queried.
        operation: &'static str,

        /// Underlying SDK error.
        #[source]
        source: aws_sdk_s3::Error,
    },

    /// Creating, writing, or flushing the report failed.
    #[error("failed to write report to '{}'", .path.display())]
    Output {
        /// Path of the report.
        path: PathBuf,

        /// Underlying CSV or IO error.
        #[source]
        source: csv::Error,
    },
}
