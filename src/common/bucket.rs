// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Represents an S3 bucket as returned by bucket enumeration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    /// The bucket name.
    pub name: String,
}

impl Bucket {
    /// Returns a `Bucket` with the given `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
