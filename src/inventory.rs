// Drives a BucketDescriber over every discovered bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    BucketDescriber,
    BucketRecords,
    ReportError,
};
use futures::stream::{
    self,
    StreamExt,
    TryStreamExt,
};
use tracing::{
    debug,
    info,
};

/// Lists the buckets known to `describer` and describes each of them.
///
/// At most `concurrency` buckets are described at the same time, a value of
/// `0` is treated as `1`. Records are returned in discovery order no matter
/// which description finishes first. The first error aborts the collection.
pub async fn collect<D>(
    describer: &D,
    concurrency: usize,
) -> Result<BucketRecords, ReportError>
where
    D: BucketDescriber + Sync,
{
    let buckets = describer.buckets().await?;

    info!("Describing {} buckets", buckets.len());

    let concurrency = concurrency.max(1);

    debug!("collect: concurrency {}", concurrency);

    let records = stream::iter(&buckets)
        .map(|bucket| describer.describe(bucket))
        .buffered(concurrency)
        .try_collect::<BucketRecords>()
        .await?;

    info!("Described {} buckets", records.len());

    Ok(records)
}
