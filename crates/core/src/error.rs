//! Error taxonomy for bucket-listing operations
//!
//! Every failure surfaced by this crate is one of four kinds, so callers
//! can pattern-match on the kind instead of inspecting SDK exception types.

/// Result type alias used throughout sgls
pub type Result<T> = std::result::Result<T, Error>;

/// Classified listing error
///
/// `NotFound` and `AccessDenied` carry the bucket name so user-facing
/// messages can identify the target. `Service` and `Unexpected` carry the
/// underlying message verbatim for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The remote service reports the bucket does not exist
    #[error("bucket '{0}' does not exist")]
    NotFound(String),

    /// The remote service reports the credentials lack permission
    #[error("access denied for bucket '{0}' - check your credentials")]
    AccessDenied(String),

    /// Any other failure reported through the service's structured
    /// error response (throttling, malformed request, ...)
    #[error("service error: {0}")]
    Service(String),

    /// A failure outside the structured error protocol: transport
    /// errors, timeouts, local configuration problems
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True for errors reported by the remote service itself
    pub fn is_remote(&self) -> bool {
        !matches!(self, Error::Unexpected(_))
    }
}

/// Map an S3 error code (plus the HTTP status, when the response carries
/// no code at all) to a classified error.
///
/// `head_bucket` failures in particular come back as bare 404/403
/// responses without an error code, so the status is consulted as a
/// fallback.
pub fn classify_error_code(
    code: Option<&str>,
    http_status: u16,
    bucket: &str,
    message: String,
) -> Error {
    match code {
        Some("NoSuchBucket") | Some("NotFound") | Some("404") => {
            Error::NotFound(bucket.to_string())
        }
        Some("AccessDenied")
        | Some("Forbidden")
        | Some("InvalidAccessKeyId")
        | Some("SignatureDoesNotMatch")
        | Some("403") => Error::AccessDenied(bucket.to_string()),
        Some(_) => Error::Service(message),
        None => match http_status {
            404 => Error::NotFound(bucket.to_string()),
            403 => Error::AccessDenied(bucket.to_string()),
            _ => Error::Service(message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_no_such_bucket() {
        let err = classify_error_code(Some("NoSuchBucket"), 404, "ghost-bucket", String::new());
        assert_eq!(err, Error::NotFound("ghost-bucket".to_string()));
    }

    #[test]
    fn test_classify_access_denied() {
        let err = classify_error_code(Some("AccessDenied"), 403, "reports", String::new());
        assert_eq!(err, Error::AccessDenied("reports".to_string()));

        let err = classify_error_code(Some("InvalidAccessKeyId"), 403, "reports", String::new());
        assert_eq!(err, Error::AccessDenied("reports".to_string()));
    }

    #[test]
    fn test_classify_bare_status_fallback() {
        // head_bucket errors carry no code, only the HTTP status
        let err = classify_error_code(None, 404, "ghost-bucket", "not found".to_string());
        assert_eq!(err, Error::NotFound("ghost-bucket".to_string()));

        let err = classify_error_code(None, 403, "reports", "forbidden".to_string());
        assert_eq!(err, Error::AccessDenied("reports".to_string()));
    }

    #[test]
    fn test_classify_other_codes_are_service_errors() {
        let err = classify_error_code(Some("SlowDown"), 503, "b", "slow down".to_string());
        assert_eq!(err, Error::Service("slow down".to_string()));

        let err = classify_error_code(None, 500, "b", "internal".to_string());
        assert_eq!(err, Error::Service("internal".to_string()));
    }

    #[test]
    fn test_is_remote() {
        assert!(Error::NotFound("b".into()).is_remote());
        assert!(Error::Service("x".into()).is_remote());
        assert!(!Error::Unexpected("connection refused".into()).is_remote());
    }

    #[test]
    fn test_display_identifies_bucket() {
        let msg = Error::NotFound("ghost-bucket".into()).to_string();
        assert!(msg.contains("ghost-bucket"));

        let msg = Error::AccessDenied("reports".into()).to_string();
        assert!(msg.contains("reports"));
        assert!(msg.contains("credentials"));
    }
}
