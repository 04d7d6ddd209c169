use std::fmt::Display;

use error_stack::{Context, Report};

#[derive(Debug)]
pub enum KernelError {
    Rejected,
    NotFound,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Rejected => write!(f, "Operation rejected"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Why a booking submission was refused before any request went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRejection {
    SignInRequired,
    NoNights,
    GuestLimitExceeded { guests: u32, max_guests: u32 },
    AlreadySubmitted,
}

impl Display for BookingRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingRejection::SignInRequired => write!(f, "Please login to book"),
            BookingRejection::NoNights => write!(f, "Check-out must be after check-in"),
            BookingRejection::GuestLimitExceeded { guests, max_guests } => write!(
                f,
                "{guests} guests requested but this place allows at most {max_guests}"
            ),
            BookingRejection::AlreadySubmitted => write!(f, "Booking already submitted"),
        }
    }
}

impl Context for BookingRejection {}

impl From<BookingRejection> for Report<KernelError> {
    fn from(rejection: BookingRejection) -> Self {
        Report::new(rejection).change_context(KernelError::Rejected)
    }
}

pub trait RejectionInspector {
    fn rejection(&self) -> Option<&BookingRejection>;
}

impl RejectionInspector for Report<KernelError> {
    fn rejection(&self) -> Option<&BookingRejection> {
        self.downcast_ref::<BookingRejection>()
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;

    use crate::{BookingRejection, KernelError, RejectionInspector};

    #[test]
    fn rejection_survives_context_change() {
        let report: Report<KernelError> = BookingRejection::GuestLimitExceeded {
            guests: 5,
            max_guests: 4,
        }
        .into();
        assert!(matches!(report.current_context(), KernelError::Rejected));
        assert_eq!(
            report.rejection(),
            Some(&BookingRejection::GuestLimitExceeded {
                guests: 5,
                max_guests: 4
            })
        );
    }

    #[test]
    fn plain_errors_carry_no_rejection() {
        let report = Report::new(KernelError::Internal);
        assert!(report.rejection().is_none());
    }
}
