//! sgls-core: Core library for the sgls bucket-listing CLI
//!
//! This crate provides the SDK-independent pieces of sgls:
//! - Error taxonomy and S3 error-code classification
//! - Connection and object-metadata value objects
//! - The `BucketStore` trait over paginated listing backends
//! - `BucketLister`, which drives pagination and the metadata probe
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod error;
pub mod lister;
pub mod types;

pub use error::{Error, Result, classify_error_code};
pub use lister::{BucketLister, BucketReport, Listing};
pub use types::{BucketMetadata, BucketStore, Connection, ObjectPage, ObjectRecord};
