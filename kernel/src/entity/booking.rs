mod contact;
mod guests;
mod id;
mod nights;
mod price;

pub use self::{contact::*, guests::*, id::*, nights::*, price::*};
use crate::entity::{PlaceId, StayDate};
use destructure::Destructure;
use vodca::References;

/// A booking as submitted to the backend. Identity is assigned by the server
/// and comes back as a [`BookingId`].
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Booking {
    place: PlaceId,
    check_in: StayDate,
    check_out: StayDate,
    guests: GuestCount,
    name: ContactName,
    phone: ContactPhone,
    price: BookingPrice,
}

impl Booking {
    pub fn new(
        place: PlaceId,
        check_in: StayDate,
        check_out: StayDate,
        guests: GuestCount,
        name: ContactName,
        phone: ContactPhone,
        price: BookingPrice,
    ) -> Self {
        Self {
            place,
            check_in,
            check_out,
            guests,
            name,
            phone,
            price,
        }
    }
}
