mod id;
mod listing;
mod max_guests;
mod price;

pub use self::{id::*, listing::*, max_guests::*, price::*};
use crate::entity::GuestCount;
use crate::BookingRejection;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Place {
    id: PlaceId,
    price: PlacePrice,
    max_guests: Option<PlaceMaxGuests>,
    title: PlaceTitle,
    photos: Vec<PlacePhoto>,
}

impl Place {
    pub fn new(id: PlaceId, price: PlacePrice, max_guests: Option<PlaceMaxGuests>) -> Self {
        Self {
            id,
            price,
            max_guests,
            title: PlaceTitle::default(),
            photos: Vec::new(),
        }
    }

    pub fn with_listing(mut self, title: PlaceTitle, photos: Vec<PlacePhoto>) -> Self {
        self.title = title;
        self.photos = photos;
        self
    }

    pub fn admits(&self, guests: &GuestCount) -> Result<(), BookingRejection> {
        let Some(max) = &self.max_guests else {
            return Ok(());
        };
        let guests: u32 = *guests.as_ref();
        let max_guests: u32 = *max.as_ref();
        if guests > max_guests {
            return Err(BookingRejection::GuestLimitExceeded { guests, max_guests });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{GuestCount, Place, PlaceId, PlaceMaxGuests, PlacePrice};
    use crate::BookingRejection;

    fn place(max_guests: Option<u32>) -> Place {
        Place::new(
            PlaceId::new("p1"),
            PlacePrice::new(100),
            PlaceMaxGuests::bounded(max_guests),
        )
    }

    #[test]
    fn admits_up_to_max_guests() {
        let place = place(Some(4));
        assert!(place.admits(&GuestCount::new(0)).is_ok());
        assert!(place.admits(&GuestCount::new(4)).is_ok());
        assert_eq!(
            place.admits(&GuestCount::new(5)),
            Err(BookingRejection::GuestLimitExceeded {
                guests: 5,
                max_guests: 4
            })
        );
    }

    #[test]
    fn unconstrained_without_max_guests() {
        assert!(place(None).admits(&GuestCount::new(500)).is_ok());
        assert!(place(Some(0)).admits(&GuestCount::new(500)).is_ok());
    }
}
