mod phase;

pub use self::phase::*;

use error_stack::Report;
use kernel::prelude::entity::{
    Booking, BookingId, BookingPrice, ContactName, ContactPhone, GuestCount, Nights, Place,
    StayDate, User,
};
use kernel::{BookingRejection, KernelError};
use vodca::References;

/// Client-held state of the booking widget for one place.
///
/// Nothing here talks to the network. [`BookingForm::begin_submission`] hands
/// out the [`Booking`] to send and moves the form into
/// [`FormPhase::Submitting`]; the caller reports the outcome back with
/// [`BookingForm::confirm`] or [`BookingForm::fail`].
#[derive(Debug, Clone, References)]
pub struct BookingForm {
    place: Place,
    user: Option<User>,
    check_in: Option<StayDate>,
    check_out: Option<StayDate>,
    guests: GuestCount,
    name: ContactName,
    phone: ContactPhone,
    phase: FormPhase,
    last_error: Option<String>,
}

impl BookingForm {
    pub fn new(place: Place, user: Option<User>) -> Self {
        let name = user
            .as_ref()
            .map(|user| ContactName::from(user.name()))
            .unwrap_or_default();
        Self {
            place,
            user,
            check_in: None,
            check_out: None,
            guests: GuestCount::default(),
            name,
            phone: ContactPhone::default(),
            phase: FormPhase::Editing,
            last_error: None,
        }
    }

    pub fn set_check_in(&mut self, raw: &str) {
        self.check_in = StayDate::parse(raw);
    }

    pub fn set_check_out(&mut self, raw: &str) {
        self.check_out = StayDate::parse(raw);
    }

    /// Returns `false` and leaves the count untouched when `raw` holds no
    /// integer.
    pub fn set_guests(&mut self, raw: &str) -> bool {
        match GuestCount::parse(raw) {
            Some(guests) => {
                self.guests = guests;
                true
            }
            None => {
                tracing::debug!("ignored guest count input {raw:?}");
                false
            }
        }
    }

    pub fn set_name(&mut self, raw: &str) {
        self.name = ContactName::new(raw);
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.phone = ContactPhone::new(raw);
    }

    pub fn nights(&self) -> Nights {
        Nights::between(self.check_in.as_ref(), self.check_out.as_ref())
    }

    pub fn price(&self) -> BookingPrice {
        BookingPrice::of(&self.nights(), self.place.price())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn redirect(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Submitted { redirect } => Some(redirect),
            _ => None,
        }
    }

    /// Runs every client-side guard and, if they all pass, moves the form
    /// into [`FormPhase::Submitting`]. A rejection leaves the form exactly
    /// as it was.
    pub fn begin_submission(&mut self) -> error_stack::Result<Booking, KernelError> {
        if self.phase != FormPhase::Editing {
            return Err(BookingRejection::AlreadySubmitted.into());
        }
        if self.user.is_none() {
            return Err(BookingRejection::SignInRequired.into());
        }
        let nights = self.nights();
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(BookingRejection::NoNights.into());
        };
        if !nights.is_bookable() {
            return Err(BookingRejection::NoNights.into());
        }
        self.place
            .admits(&self.guests)
            .map_err(Report::<KernelError>::from)?;

        let booking = Booking::new(
            self.place.id().clone(),
            check_in,
            check_out,
            self.guests,
            self.name.clone(),
            self.phone.clone(),
            BookingPrice::of(&nights, self.place.price()),
        );
        self.phase = FormPhase::Submitting;
        self.last_error = None;
        Ok(booking)
    }

    pub fn confirm(&mut self, id: &BookingId) {
        if self.phase != FormPhase::Submitting {
            tracing::warn!("booking {} confirmed outside of a submission", id.as_ref());
            return;
        }
        self.phase = FormPhase::Submitted {
            redirect: id.confirmation_path(),
        };
    }

    pub fn fail(&mut self, error: &Report<KernelError>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = FormPhase::Editing;
        self.last_error = Some(error.current_context().to_string());
    }
}
