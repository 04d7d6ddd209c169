use time::Date;
use vodca::{AsRefln, Fromln};

use crate::entity::StayDate;

/// Calendar days between check-in and check-out. Negative when the dates are
/// reversed; zero while either date is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Fromln, AsRefln)]
pub struct Nights(i64);

impl Nights {
    pub fn new(nights: impl Into<i64>) -> Self {
        Self(nights.into())
    }

    pub fn between(check_in: Option<&StayDate>, check_out: Option<&StayDate>) -> Self {
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => {
                let check_in: &Date = check_in.as_ref();
                let check_out: &Date = check_out.as_ref();
                Self((*check_out - *check_in).whole_days())
            }
            _ => Self(0),
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.0 > 0
    }
}
