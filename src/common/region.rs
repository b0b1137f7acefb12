// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::fmt;
use tracing::debug;

/// The region S3 reports as an empty location constraint, and the region we
/// fall back to when nothing in the environment selects one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// The region behind the legacy `EU` location constraint.
const EU_REGION: &str = "eu-west-1";

/// An AWS region name, always populated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Region(region::Region);

impl Default for Region {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl Region {
    /// Returns a `Region` for the given region `name`.
    pub fn new(name: &str) -> Self {
        Self(region::Region::new(name.to_string()))
    }

    /// Returns the `Region` described by a `GetBucketLocation` location
    /// constraint.
    ///
    /// Location constraints for sufficiently old buckets in S3 may not quite
    /// meet expectations. Buckets in `us-east-1` report no constraint at all
    /// and the oldest buckets in `eu-west-1` report `EU`.
    pub fn from_location_constraint(constraint: Option<&str>) -> Self {
        debug!("from_location_constraint: {:?}", constraint);

        let name = match constraint {
            None | Some("") => DEFAULT_REGION,
            Some("EU")      => EU_REGION,
            Some(name)      => name,
        };

        Self::new(name)
    }

    /// Returns the region name.
    pub fn name(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Region> for region::Region {
    fn from(region: Region) -> Self {
        region.0
    }
}

impl ProvideRegion for Region {
    // Allows our Region to be used as the last link in an aws-config region
    // provider chain.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(Some(self.0.clone()))
    }
}
