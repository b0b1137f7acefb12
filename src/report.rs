// Writes BucketRecords out as a CSV report
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    BucketRecord,
    ReportError,
};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{
    debug,
    info,
};

/// Column names of the report, in output order.
pub const HEADER: [&str; 8] = [
    "Name",
    "Region",
    "Versioning",
    "Encryption Status",
    "Encryption Type",
    "Logging",
    "Logging Bucket",
    "Public",
];

/// Write the header and one row per record, in order, to `writer`.
///
/// The writer is flushed before returning.
pub fn write_records<W>(writer: W, records: &[BucketRecord]) -> csv::Result<()>
where
    W: io::Write,
{
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(record.fields())?;
    }

    writer.flush()?;

    Ok(())
}

/// Write the report for `records` to the file at `path`.
///
/// Any existing file at `path` is truncated.
pub fn write(path: &Path, records: &[BucketRecord]) -> Result<(), ReportError> {
    debug!("write: Creating '{}'", path.display());

    let output_error = |source: csv::Error| {
        ReportError::Output {
            path:   path.to_path_buf(),
            source: source,
        }
    };

    let file = File::create(path)
        .map_err(|e| output_error(csv::Error::from(e)))?;

    write_records(file, records)
        .map_err(output_error)?;

    info!("Wrote {} buckets to '{}'", records.len(), path.display());

    Ok(())
}
