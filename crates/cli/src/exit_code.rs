//! Process exit codes
//!
//! Each classified error kind maps to a distinct non-zero code so
//! scripts can branch on the failure reason. Usage errors exit with 2
//! via clap itself.

use sgls_core::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// Unexpected/local failures outside the remote error protocol
    GeneralError = 1,
    /// Structured remote failures other than not-found/access-denied
    ServiceError = 3,
    AccessDenied = 4,
    NotFound = 5,
}

impl ExitCode {
    /// Terminate the process with this code
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::NotFound(_) => ExitCode::NotFound,
            Error::AccessDenied(_) => ExitCode::AccessDenied,
            Error::Service(_) => ExitCode::ServiceError,
            Error::Unexpected(_) => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            ExitCode::from(&Error::NotFound("ghost-bucket".into())),
            ExitCode::NotFound
        );
        assert_eq!(
            ExitCode::from(&Error::AccessDenied("b".into())),
            ExitCode::AccessDenied
        );
        assert_eq!(
            ExitCode::from(&Error::Service("slow down".into())),
            ExitCode::ServiceError
        );
        assert_eq!(
            ExitCode::from(&Error::Unexpected("connection refused".into())),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_codes_are_distinct_and_nonzero_on_failure() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::ServiceError as i32, 3);
        assert_eq!(ExitCode::AccessDenied as i32, 4);
        assert_eq!(ExitCode::NotFound as i32, 5);
    }
}
