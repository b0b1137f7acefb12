// Implement the BucketDescriber trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    Bucket,
    BucketDescriber,
    BucketRecord,
    Buckets,
    ReportError,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketDescriber for Client {
    /// Return `Buckets` discovered in S3.
    async fn buckets(&self) -> Result<Buckets, ReportError> {
        debug!("buckets: Listing...");

        let buckets = self.list_buckets().await?;

        debug!("buckets: Found {} buckets", buckets.len());

        Ok(buckets)
    }

    /// Describe `bucket`.
    ///
    /// The bucket is located with this client, every other query goes through
    /// a client in the bucket's own region.
    async fn describe(&self, bucket: &Bucket) -> Result<BucketRecord, ReportError> {
        let name = &bucket.name;

        debug!("describe: Describing '{}'", name);

        let region   = self.get_bucket_location(name).await?;
        let regional = self.regional(&region);

        let versioning = regional.get_bucket_versioning(name).await?;
        let encryption = regional.get_bucket_encryption(name).await;
        let logging    = regional.get_bucket_logging(name).await;
        let is_public  = regional.get_bucket_policy_status(name).await;

        let record = BucketRecord {
            name:       name.to_owned(),
            region:     region,
            versioning: versioning,
            encryption: encryption,
            logging:    logging,
            is_public:  is_public,
        };

        debug!("describe: '{}' -> {:?}", name, record);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        Encryption,
        EncryptionType,
        Logging,
        Region,
        VersioningStatus,
    };
    use crate::inventory;
    use crate::report;
    use super::super::client::tests::{
        mock_client,
        ResponseType,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_buckets() {
        let (client, _) = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets.xml"),
        ]);

        let buckets = client.buckets().await.unwrap();

        let buckets: Vec<String> = buckets.iter()
            .map(|b| b.name.to_owned())
            .collect();

        let expected = vec![
            "a-bucket-name",
            "another-bucket-name",
        ];

        assert_eq!(buckets, expected);
    }

    #[tokio::test]
    async fn test_describe() {
        let (client, _) = mock_client(vec![
            ResponseType::FromFile("s3-get-bucket-location.xml"),
            ResponseType::FromFile("s3-get-bucket-versioning-suspended.xml"),
            ResponseType::FromFile("s3-get-bucket-encryption-aes256.xml"),
            ResponseType::FromFile("s3-get-bucket-logging-enabled.xml"),
            ResponseType::FromFile("s3-get-bucket-policy-status-private.xml"),
        ]);

        let bucket = Bucket::new("a-bucket-name");
        let ret    = client.describe(&bucket).await.unwrap();

        let expected = BucketRecord {
            name:       "a-bucket-name".into(),
            region:     Region::new("eu-west-1"),
            versioning: VersioningStatus::Suspended,
            encryption: Encryption::Enabled(EncryptionType::Sse),
            logging:    Logging::Enabled {
                target_bucket: "a-bucket-name-logs".into(),
            },
            is_public:  false,
        };

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_describe_locate_err() {
        let (client, http_client) = mock_client(vec![
            ResponseType::ErrorFromFile(403, "s3-error-access-denied.xml"),
        ]);

        let bucket = Bucket::new("a-bucket-name");
        let ret    = client.describe(&bucket).await;

        assert!(matches!(ret, Err(ReportError::Locate { .. })));

        // Nothing else is queried once locating fails.
        assert_eq!(http_client.actual_requests().count(), 1);
    }

    #[tokio::test]
    async fn test_describe_versioning_err() {
        let (client, http_client) = mock_client(vec![
            ResponseType::FromFile("s3-get-bucket-location.xml"),
            ResponseType::ErrorFromFile(403, "s3-error-access-denied.xml"),
        ]);

        let bucket = Bucket::new("a-bucket-name");
        let ret    = client.describe(&bucket).await;

        assert!(matches!(ret, Err(ReportError::Describe { .. })));
        assert_eq!(http_client.actual_requests().count(), 2);
    }

    #[tokio::test]
    async fn test_describe_regional_requests() {
        let (client, http_client) = mock_client(vec![
            ResponseType::FromFile("s3-get-bucket-location.xml"),
            ResponseType::FromFile("s3-get-bucket-versioning-unset.xml"),
            ResponseType::FromFile("s3-get-bucket-encryption-kms.xml"),
            ResponseType::FromFile("s3-get-bucket-logging-disabled.xml"),
            ResponseType::FromFile("s3-get-bucket-policy-status-public.xml"),
        ]);

        let bucket = Bucket::new("a-bucket-name");
        client.describe(&bucket).await.unwrap();

        let uris: Vec<String> = http_client.actual_requests()
            .map(|r| r.uri().to_string())
            .collect();

        assert_eq!(uris.len(), 5);

        // Everything after the location lookup uses the bucket's region.
        for uri in &uris[1..] {
            assert!(uri.contains("eu-west-1"), "uri was {}", uri);
        }
    }

    // Two buckets, one in the default region with KMS encryption and no
    // policy, one in eu-west-1 with logging and a public policy.
    #[tokio::test]
    async fn test_report_alpha_beta() {
        let (client, _) = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets-alpha-beta.xml"),

            // alpha
            ResponseType::FromFile("s3-get-bucket-location-null.xml"),
            ResponseType::FromFile("s3-get-bucket-versioning-enabled.xml"),
            ResponseType::FromFile("s3-get-bucket-encryption-kms.xml"),
            ResponseType::FromFile("s3-get-bucket-logging-disabled.xml"),
            ResponseType::ErrorFromFile(404, "s3-error-no-such-bucket-policy.xml"),

            // beta
            ResponseType::FromFile("s3-get-bucket-location.xml"),
            ResponseType::FromFile("s3-get-bucket-versioning-unset.xml"),
            ResponseType::ErrorFromFile(
                404,
                "s3-error-no-encryption-configuration.xml",
            ),
            ResponseType::FromFile("s3-get-bucket-logging-beta.xml"),
            ResponseType::FromFile("s3-get-bucket-policy-status-public.xml"),
        ]);

        // The replayed responses are only meaningful in request order.
        let records = inventory::collect(&client, 1).await.unwrap();

        let mut output = Vec::new();
        report::write_records(&mut output, &records).unwrap();

        let output = String::from_utf8(output).unwrap();

        let expected = concat!(
            "Name,Region,Versioning,Encryption Status,Encryption Type,",
            "Logging,Logging Bucket,Public\n",
            "alpha,us-east-1,Enabled,Enabled,KMS,Not Enabled,None,false\n",
            "beta,eu-west-1,Not Enabled,Not Enabled,None,Enabled,beta-logs,true\n",
        );

        assert_eq!(output, expected);
    }
}
