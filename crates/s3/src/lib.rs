//! sgls-s3: aws-sdk-s3 adapter for sgls
//!
//! Binds the SDK-independent `BucketStore` seam from sgls-core to
//! aws-sdk-s3, including error classification into the core taxonomy.

pub mod client;

pub use client::S3Client;
