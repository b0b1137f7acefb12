// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod bucket_describer;
mod bucket_record;
mod error;
mod region;
mod report_config;

pub use bucket::*;
pub use bucket_describer::*;
pub use bucket_record::*;
pub use error::*;
pub use region::*;
pub use report_config::*;
