use error_stack::Report;
use kernel::{KernelError, RejectionInspector};
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// One-line message shown to the guest when an operation fails.
pub struct ErrorBanner<'a>(&'a Report<KernelError>);

impl<'a> From<&'a Report<KernelError>> for ErrorBanner<'a> {
    fn from(e: &'a Report<KernelError>) -> Self {
        ErrorBanner(e)
    }
}

impl std::fmt::Display for ErrorBanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rejection) = self.0.rejection() {
            return write!(f, "{rejection}");
        }
        match self.0.current_context() {
            KernelError::NotFound => {
                write!(f, "The booking service could not find what was asked for")
            }
            KernelError::Timeout => write!(f, "The booking service did not answer in time"),
            KernelError::Rejected | KernelError::Internal => {
                write!(f, "Something went wrong, please try again")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;
    use kernel::{BookingRejection, KernelError};

    use crate::error::ErrorBanner;

    #[test]
    fn rejections_explain_themselves() {
        let report: Report<KernelError> = BookingRejection::GuestLimitExceeded {
            guests: 5,
            max_guests: 4,
        }
        .into();
        assert_eq!(
            ErrorBanner::from(&report).to_string(),
            "5 guests requested but this place allows at most 4"
        );
    }

    #[test]
    fn transport_errors_are_generic() {
        let report = Report::new(KernelError::Timeout);
        assert_eq!(
            ErrorBanner::from(&report).to_string(),
            "The booking service did not answer in time"
        );
        let report = Report::new(KernelError::Internal);
        assert_eq!(
            ErrorBanner::from(&report).to_string(),
            "Something went wrong, please try again"
        );
    }

    #[test]
    fn missing_resources_are_not_blamed_on_the_place() {
        let report = Report::new(KernelError::NotFound);
        let banner = ErrorBanner::from(&report).to_string();
        assert_eq!(banner, "The booking service could not find what was asked for");
        assert!(!banner.contains("place"));
    }
}
