// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{
    BucketVersioningStatus,
    ServerSideEncryption,
};
use crate::common::{
    Bucket,
    Buckets,
    Encryption,
    EncryptionType,
    Logging,
    Region,
    ReportError,
    VersioningStatus,
};
use tracing::debug;

/// The S3 `Client`.
#[derive(Clone, Debug)]
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` using the ambient AWS configuration.
    ///
    /// The region is taken from the environment or profile, falling back to
    /// `fallback_region`. Credentials are resolved up front so that a
    /// misconfigured environment fails before any bucket is listed.
    pub async fn new(fallback_region: Region) -> Result<Self, ReportError> {
        let region = RegionProviderChain::default_provider()
            .or_else(fallback_region);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        debug!(
            "new: Creating S3Client in region '{:?}'",
            config.region(),
        );

        let provider = config.credentials_provider()
            .ok_or_else(|| {
                ReportError::Config("no credentials provider found".into())
            })?;

        provider.provide_credentials()
            .await
            .map_err(|e| {
                ReportError::Config(DisplayErrorContext(&e).to_string())
            })?;

        let client = S3Client::new(&config);

        Ok(Self {
            client,
        })
    }

    /// Returns a copy of this `Client` scoped to `region`.
    ///
    /// Everything but the region is shared with this client.
    pub fn regional(&self, region: &Region) -> Self {
        debug!("regional: Creating S3Client in region '{}'", region);

        let config = self.client.config()
            .to_builder()
            .region(aws_types::region::Region::from(region.clone()))
            .build();

        Self {
            client: S3Client::from_conf(config),
        }
    }

    /// Returns the buckets owned by the account.
    ///
    /// Buckets returned without a name are skipped.
    pub async fn list_buckets(&self) -> Result<Buckets, ReportError> {
        debug!("list_buckets: Listing...");

        let output = self.client.list_buckets()
            .send()
            .await
            .map_err(|e| ReportError::Enumeration(e.into()))?;

        let buckets = output.buckets()
            .iter()
            .filter_map(|b| b.name())
            .map(Bucket::new)
            .collect();

        Ok(buckets)
    }

    /// Return the bucket location (`Region`) for the given `bucket`.
    ///
    /// This method will properly handle the case of the `null` (empty) and
    /// `EU` location constraints, by replacing them with `us-east-1` and
    /// `eu-west-1` respectively.
    pub async fn get_bucket_location(
        &self,
        bucket: &str,
    ) -> Result<Region, ReportError> {
        debug!("get_bucket_location for '{}'", bucket);

        let output = self.client.get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                ReportError::Locate {
                    bucket: bucket.into(),
                    source: e.into(),
                }
            })?;

        let constraint = output.location_constraint()
            .map(|c| c.as_str());

        debug!("GetBucketLocation API returned '{:?}'", constraint);

        Ok(Region::from_location_constraint(constraint))
    }

    /// Returns the `VersioningStatus` of the given `bucket`.
    ///
    /// Any status other than `Enabled` or `Suspended`, including no status at
    /// all, is `NotEnabled`. Errors are returned rather than being treated as
    /// `NotEnabled`.
    pub async fn get_bucket_versioning(
        &self,
        bucket: &str,
    ) -> Result<VersioningStatus, ReportError> {
        debug!("get_bucket_versioning for '{}'", bucket);

        let output = self.client.get_bucket_versioning()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                ReportError::Describe {
                    bucket:    bucket.into(),
                    operation: "versioning",
                    source:    e.into(),
                }
            })?;

        let status = match output.status() {
            Some(BucketVersioningStatus::Enabled)   => VersioningStatus::Enabled,
            Some(BucketVersioningStatus::Suspended) => VersioningStatus::Suspended,
            _                                       => VersioningStatus::NotEnabled,
        };

        Ok(status)
    }

    /// Returns the default `Encryption` of the given `bucket`.
    ///
    /// S3 reports a bucket without default encryption as an error, so any
    /// error is treated as `NotEnabled`. Only the first rule is considered.
    pub async fn get_bucket_encryption(&self, bucket: &str) -> Encryption {
        debug!("get_bucket_encryption for '{}'", bucket);

        let output = self.client.get_bucket_encryption()
            .bucket(bucket)
            .send()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e)     => {
                debug!(
                    "get_bucket_encryption for '{}' treated as not enabled: {}",
                    bucket,
                    DisplayErrorContext(&e),
                );

                return Encryption::NotEnabled;
            },
        };

        let algorithm = output.server_side_encryption_configuration()
            .and_then(|c| c.rules().first())
            .and_then(|r| r.apply_server_side_encryption_by_default())
            .map(|d| d.sse_algorithm());

        match algorithm {
            Some(ServerSideEncryption::Aes256) => {
                Encryption::Enabled(EncryptionType::Sse)
            },
            Some(ServerSideEncryption::AwsKms) => {
                Encryption::Enabled(EncryptionType::Kms)
            },
            _ => Encryption::NotEnabled,
        }
    }

    /// Returns the access `Logging` configuration of the given `bucket`.
    ///
    /// Errors are treated as `NotEnabled`.
    pub async fn get_bucket_logging(&self, bucket: &str) -> Logging {
        debug!("get_bucket_logging for '{}'", bucket);

        let output = self.client.get_bucket_logging()
            .bucket(bucket)
            .send()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e)     => {
                debug!(
                    "get_bucket_logging for '{}' treated as not enabled: {}",
                    bucket,
                    DisplayErrorContext(&e),
                );

                return Logging::NotEnabled;
            },
        };

        match output.logging_enabled() {
            Some(logging) => Logging::Enabled {
                target_bucket: logging.target_bucket().to_string(),
            },
            None => Logging::NotEnabled,
        }
    }

    /// Returns a `bool` indicating if the policy of the given `bucket` makes
    /// it public.
    ///
    /// Buckets without a policy report an error, so any error is `false`.
    pub async fn get_bucket_policy_status(&self, bucket: &str) -> bool {
        debug!("get_bucket_policy_status for '{}'", bucket);

        let output = self.client.get_bucket_policy_status()
            .bucket(bucket)
            .send()
            .await;

        match output {
            Ok(output) => {
                output.policy_status()
                    .and_then(|s| s.is_public())
                    .unwrap_or(false)
            },
            Err(e) => {
                debug!(
                    "get_bucket_policy_status for '{}' treated as private: {}",
                    bucket,
                    DisplayErrorContext(&e),
                );

                false
            },
        }
    }
}
