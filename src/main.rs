// s3report: A tool for reporting on the configuration of AWS S3 buckets.
use anyhow::{
    Context,
    Result,
};
use common::{
    BucketDescriber,
    Region,
    ReportConfig,
};
use tracing::{
    error,
    info,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
mod inventory;
mod report;
mod s3;

// Log level used when RUST_LOG isn't set.
const DEFAULT_LOG_LEVEL: &str = "warn";

// Logs go to stderr so they never mix with anything a user pipes.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Collect every bucket's configuration with `describer` and write it out.
// The report file is only touched once every bucket has been described.
async fn report_with<D>(describer: &D, config: &ReportConfig) -> Result<()>
where
    D: BucketDescriber + Sync,
{
    let records = inventory::collect(describer, config.concurrency)
        .await
        .context("Failed to collect bucket configuration")?;

    report::write(&config.output, &records)
        .context("Failed to write report")?;

    info!("Report written to '{}'", config.output.display());

    Ok(())
}

async fn run(config: &ReportConfig) -> Result<()> {
    let client = s3::Client::new(Region::default())
        .await
        .context("Failed to create S3 client")?;

    report_with(&client, config).await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let matches = cli::parse_args();
    let config  = cli::report_config(&matches);

    // No partial reports, any error ends the run. The error is also returned
    // so it reaches stderr whatever RUST_LOG filters out.
    if let Err(e) = run(&config).await {
        error!("{:#}", e);

        return Err(e);
    }

    Ok(())
}
