// BucketRecord and the states that make it up
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Region;
use std::fmt;

/// Rendered in place of a value when a feature isn't configured.
const NONE: &str = "None";

/// Rendered status for a feature that is configured.
const ENABLED: &str = "Enabled";

/// Rendered status for a feature that isn't configured.
const NOT_ENABLED: &str = "Not Enabled";

/// Versioning state of a bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersioningStatus {
    /// Versioning is on.
    Enabled,

    /// Versioning was on and has since been suspended.
    Suspended,

    /// Versioning has never been configured.
    NotEnabled,
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Enabled    => ENABLED,
            Self::Suspended  => "Suspended",
            Self::NotEnabled => NOT_ENABLED,
        };

        f.write_str(status)
    }
}

/// Algorithm backing default bucket encryption.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncryptionType {
    /// S3 managed keys (`AES256`).
    Sse,

    /// KMS managed keys (`aws:kms`).
    Kms,
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Sse => "SSE",
            Self::Kms => "KMS",
        };

        f.write_str(kind)
    }
}

/// Default server-side encryption configuration of a bucket.
///
/// The encryption type only exists when encryption is enabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Encryption {
    /// Default encryption is configured with the given algorithm.
    Enabled(EncryptionType),

    /// No default encryption, or an algorithm we don't report on.
    NotEnabled,
}

impl Encryption {
    /// Returns the rendered encryption status.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Enabled(_) => ENABLED,
            Self::NotEnabled => NOT_ENABLED,
        }
    }

    /// Returns the rendered encryption type, `None` when not enabled.
    pub fn kind(&self) -> String {
        match self {
            Self::Enabled(kind) => kind.to_string(),
            Self::NotEnabled    => NONE.to_string(),
        }
    }
}

/// Server access logging configuration of a bucket.
///
/// The target bucket only exists when logging is enabled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Logging {
    /// Access logs are delivered to `target_bucket`.
    Enabled {
        /// Bucket receiving the access logs.
        target_bucket: String,
    },

    /// Access logging isn't configured.
    NotEnabled,
}

impl Logging {
    /// Returns the rendered logging status.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Enabled { .. } => ENABLED,
            Self::NotEnabled     => NOT_ENABLED,
        }
    }

    /// Returns the logging target bucket, `None` when not enabled.
    pub fn target_bucket(&self) -> &str {
        match self {
            Self::Enabled { target_bucket } => target_bucket,
            Self::NotEnabled                => NONE,
        }
    }
}

/// The configuration snapshot of a single S3 bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketRecord {
    /// Bucket name.
    pub name: String,

    /// Region the bucket lives in.
    pub region: Region,

    /// Versioning state.
    pub versioning: VersioningStatus,

    /// Default encryption.
    pub encryption: Encryption,

    /// Access logging.
    pub logging: Logging,

    /// Whether the bucket policy makes the bucket public.
    pub is_public: bool,
}

impl BucketRecord {
    /// Returns the record as rendered CSV fields, in header order.
    pub fn fields(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.region.to_string(),
            self.versioning.to_string(),
            self.encryption.status().to_string(),
            self.encryption.kind(),
            self.logging.status().to_string(),
            self.logging.target_bucket().to_string(),
            self.is_public.to_string(),
        ]
    }
}

/// Convenience type for a list of `BucketRecord`.
pub type BucketRecords = Vec<BucketRecord>;
