use serde::{Deserialize, Serialize};

use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{Booking, BookingId};
use kernel::KernelError;

use crate::api::{read_json, HttpBackend};
use crate::error::{ConvertError, DriverError};

#[async_trait::async_trait]
impl BookingModifier for HttpBackend {
    async fn create(&self, booking: &Booking) -> error_stack::Result<BookingId, KernelError> {
        HttpBookingInternal::create(self, booking).await.convert_error()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingBody<'a> {
    check_in: String,
    check_out: String,
    number_of_guests: u32,
    name: &'a String,
    phone: &'a String,
    place: &'a String,
    price: f64,
}

impl<'a> From<&'a Booking> for CreateBookingBody<'a> {
    fn from(value: &'a Booking) -> Self {
        Self {
            check_in: value.check_in().to_string(),
            check_out: value.check_out().to_string(),
            number_of_guests: *value.guests().as_ref(),
            name: value.name().as_ref(),
            phone: value.phone().as_ref(),
            place: value.place().as_ref(),
            price: *value.price().as_ref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedBookingRow {
    #[serde(rename = "_id", alias = "id")]
    id: String,
}

pub(in crate::api) struct HttpBookingInternal;

impl HttpBookingInternal {
    async fn create(backend: &HttpBackend, booking: &Booking) -> Result<BookingId, DriverError> {
        let response = backend
            .post("/bookings")
            .json(&CreateBookingBody::from(booking))
            .send()
            .await?;
        let row: CreatedBookingRow = read_json(response).await?;
        Ok(BookingId::new(row.id))
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use application::form::{BookingForm, FormPhase};
    use application::service::SubmitBookingService;
    use serde_json::json;

    use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
    use kernel::prelude::entity::{
        Booking, BookingId, BookingPrice, ContactName, ContactPhone, GuestCount, Place, PlaceId,
        PlacePrice, StayDate, User, UserName,
    };
    use kernel::KernelError;

    use crate::api::{mock, HttpBackend};

    fn booking() -> Booking {
        Booking::new(
            PlaceId::new("p1"),
            StayDate::parse("2024-01-10").unwrap(),
            StayDate::parse("2024-01-13").unwrap(),
            GuestCount::new(2),
            ContactName::new("Ada"),
            ContactPhone::new("555-0100"),
            BookingPrice::new(300),
        )
    }

    #[tokio::test]
    async fn posts_booking_body() {
        let (backend, recorded) = mock::spawn(false, None).await;
        let id = backend.create(&booking()).await.unwrap();
        assert_eq!(id, BookingId::new("b1"));

        let bookings = recorded.bookings.lock().unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(
            bookings[0],
            json!({
                "checkIn": "2024-01-10",
                "checkOut": "2024-01-13",
                "numberOfGuests": 2,
                "name": "Ada",
                "phone": "555-0100",
                "place": "p1",
                "price": 300.0
            })
        );
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let backend =
            mock::spawn_slow(Duration::from_millis(500), Duration::from_millis(50)).await;
        let report = backend.create(&booking()).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Timeout));
    }

    struct Module(HttpBackend);

    impl DependOnBookingModifier for Module {
        type BookingModifier = HttpBackend;
        fn booking_modifier(&self) -> &Self::BookingModifier {
            &self.0
        }
    }

    #[tokio::test]
    async fn timed_out_submission_returns_form_to_editing() {
        let module = Module(
            mock::spawn_slow(Duration::from_millis(500), Duration::from_millis(50)).await,
        );
        let place = Place::new(PlaceId::new("p1"), PlacePrice::new(100), None);
        let mut form = BookingForm::new(place, Some(User::new(UserName::new("Ada"))));
        form.set_check_in("2024-01-10");
        form.set_check_out("2024-01-13");

        let report = module.submit_booking(&mut form).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Timeout));
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.last_error().as_deref(), Some("Process timed out"));
    }

    #[tokio::test]
    async fn backend_refusal_is_an_error() {
        let (backend, recorded) = mock::spawn(true, None).await;
        let report = backend.create(&booking()).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Internal));
        assert!(recorded.bookings.lock().unwrap().is_empty());
    }
}
