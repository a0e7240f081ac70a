//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the BucketStore trait from sgls-core.

use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use jiff::Timestamp;
use sgls_core::{
    BucketMetadata, BucketStore, Connection, Error, ObjectPage, ObjectRecord, Result,
    classify_error_code,
};

/// S3 client wrapper bound to one endpoint and one set of credentials
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from connection parameters
    ///
    /// Validates the endpoint URL locally; everything else is validated
    /// by the remote service.
    pub async fn connect(conn: &Connection) -> Result<Self> {
        validate_endpoint(&conn.endpoint_url)?;

        if !conn.verify_tls {
            tracing::warn!(
                endpoint = %conn.endpoint_url,
                "TLS certificate verification disabled; connections can be intercepted"
            );
        }

        let credentials = aws_credential_types::Credentials::new(
            conn.access_key.clone(),
            conn.secret_key.clone(),
            None, // session token
            None, // expiry
            "sgls-static-credentials",
        );

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(conn.region.clone()))
            .endpoint_url(&conn.endpoint_url)
            .load()
            .await;

        // Path-style addressing for S3-compatible endpoints like StorageGRID
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// The endpoint must be an absolute http(s) URL
fn validate_endpoint(endpoint: &str) -> Result<()> {
    let parsed = url::Url::parse(endpoint)
        .map_err(|e| Error::Unexpected(format!("invalid endpoint URL '{endpoint}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Unexpected(format!(
            "invalid endpoint URL '{endpoint}': unsupported scheme '{other}'"
        ))),
    }
}

/// Classify an SDK failure into the core error taxonomy
///
/// Structured service responses are classified by their S3 error code,
/// falling back to the HTTP status for responses that carry none (head
/// requests report bare 404/403). Everything that never reached the
/// structured error protocol becomes `Unexpected`.
fn classify_sdk_error<E>(error: SdkError<E>, bucket: &str) -> Error
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    match &error {
        SdkError::ServiceError(service_err) => {
            let err = service_err.err();
            let status = service_err.raw().status().as_u16();
            let message = match err.message() {
                Some(m) => m.to_string(),
                None => err.to_string(),
            };
            classify_error_code(err.code(), status, bucket, message)
        }
        SdkError::ConstructionFailure(e) => {
            Error::Unexpected(format!("request construction failed: {e:?}"))
        }
        SdkError::TimeoutError(_) => Error::Unexpected("request timeout".to_string()),
        SdkError::DispatchFailure(e) => Error::Unexpected(format!("network dispatch error: {e:?}")),
        SdkError::ResponseError(e) => Error::Unexpected(format!("response error: {e:?}")),
        _ => Error::Unexpected(error.to_string()),
    }
}

#[async_trait]
impl BucketStore for S3Client {
    async fn list_page(&self, bucket: &str, token: Option<&str>) -> Result<ObjectPage> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        if let Some(t) = token {
            request = request.continuation_token(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_sdk_error(e, bucket))?;

        let records = response
            .contents()
            .iter()
            .map(|object| ObjectRecord {
                key: object.key().unwrap_or_default().to_string(),
                size_bytes: object.size().unwrap_or(0),
                last_modified: object
                    .last_modified()
                    .and_then(|dt| Timestamp::from_second(dt.secs()).ok()),
                storage_class: object
                    .storage_class()
                    .map(|sc| sc.as_str().to_string())
                    .unwrap_or_else(|| "STANDARD".to_string()),
            })
            .collect();

        let continuation_token = if response.is_truncated().unwrap_or(false) {
            response.next_continuation_token().map(str::to_string)
        } else {
            None
        };

        Ok(ObjectPage {
            records,
            continuation_token,
        })
    }

    async fn head_bucket(&self, bucket: &str) -> Result<BucketMetadata> {
        use aws_sdk_s3::operation::RequestId;

        let response = self
            .inner
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| classify_sdk_error(e, bucket))?;

        Ok(BucketMetadata {
            request_id: response.request_id().unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_accepts_http_and_https() {
        assert!(validate_endpoint("https://s3.grid.example.com").is_ok());
        assert!(validate_endpoint("http://localhost:8082").is_ok());
    }

    #[test]
    fn test_validate_endpoint_rejects_relative_urls() {
        let err = validate_endpoint("s3.grid.example.com").unwrap_err();
        assert!(matches!(err, Error::Unexpected(_)));
    }

    #[test]
    fn test_validate_endpoint_rejects_other_schemes() {
        let err = validate_endpoint("ftp://s3.grid.example.com").unwrap_err();
        assert!(matches!(err, Error::Unexpected(_)));
    }
}
