// BucketDescriber trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    Bucket,
    BucketRecord,
    Buckets,
    ReportError,
};

/// `BucketDescriber` represents the required methods to list S3 buckets and
/// describe their configuration.
///
/// This trait should be implemented by all `Client`s performing these tasks.
#[async_trait]
pub trait BucketDescriber {
    /// Returns the buckets owned by the account, in discovery order.
    async fn buckets(&self) -> Result<Buckets, ReportError>;

    /// Returns the configuration snapshot of the given `bucket`.
    async fn describe(&self, bucket: &Bucket) -> Result<BucketRecord, ReportError>;
}
