use kernel::prelude::entity::BookingId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedBookingDto {
    pub id: String,
    pub redirect: String,
}

impl From<BookingId> for SubmittedBookingDto {
    fn from(value: BookingId) -> Self {
        let redirect = value.confirmation_path();
        Self {
            id: value.into(),
            redirect,
        }
    }
}
