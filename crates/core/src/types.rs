//! Value objects and the backend trait for bucket listing

use async_trait::async_trait;
use jiff::Timestamp;
use serde::Serialize;

use crate::error::Result;

/// Connection parameters for one listing run
///
/// Immutable once constructed; owned by the caller for the duration of a
/// single listing operation. `secret_key` is sensitive and is therefore
/// excluded from the `Debug` output.
#[derive(Clone)]
pub struct Connection {
    /// Endpoint URL of the S3-compatible service (absolute URL)
    pub endpoint_url: String,
    /// Access key ID
    pub access_key: String,
    /// Secret access key
    pub secret_key: String,
    /// Signing region (S3-compatible services generally accept any value)
    pub region: String,
    /// Whether to verify TLS certificates; disabling is an explicit
    /// caller-opt-in security downgrade
    pub verify_tls: bool,
}

impl Connection {
    /// Create a connection with the default region and TLS verification on
    pub fn new(
        endpoint_url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: "us-east-1".to_string(),
            verify_tls: true,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint_url", &self.endpoint_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

/// Metadata for one stored object, produced transiently per page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRecord {
    pub key: String,
    pub size_bytes: i64,
    pub last_modified: Option<Timestamp>,
    /// Storage tier label; services that omit it mean "STANDARD"
    pub storage_class: String,
}

/// One page of listing results
///
/// `continuation_token` is the opaque cursor for the next page; `None`
/// marks the final page.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    pub records: Vec<ObjectRecord>,
    pub continuation_token: Option<String>,
}

/// Bucket-level metadata captured from the head probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketMetadata {
    /// Request ID assigned by the service to the probe request
    pub request_id: String,
}

/// A paginated bucket-listing backend
///
/// The S3 adapter implements this over aws-sdk-s3; tests implement it
/// with scripted in-memory doubles. Implementations must return pages in
/// the service's key order and hand back each continuation token exactly
/// as received.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Fetch one page of objects, continuing from `token` if given
    async fn list_page(&self, bucket: &str, token: Option<&str>) -> Result<ObjectPage>;

    /// Probe the bucket for existence/access and capture its request ID
    async fn head_bucket(&self, bucket: &str) -> Result<BucketMetadata>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_defaults() {
        let conn = Connection::new("https://grid.example.com", "ak", "sk");
        assert_eq!(conn.region, "us-east-1");
        assert!(conn.verify_tls);
    }

    #[test]
    fn test_connection_builders() {
        let conn = Connection::new("https://grid.example.com", "ak", "sk")
            .with_region("eu-west-1")
            .with_verify_tls(false);
        assert_eq!(conn.region, "eu-west-1");
        assert!(!conn.verify_tls);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let conn = Connection::new("https://grid.example.com", "ak", "super-secret");
        let debug = format!("{conn:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
