use crate::entity::{Booking, BookingId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    async fn create(&self, booking: &Booking) -> error_stack::Result<BookingId, KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send {
    type BookingModifier: BookingModifier;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
