use error_stack::Report;
use kernel::interface::query::{
    DependOnPlaceQuery, DependOnSessionQuery, PlaceQuery, SessionQuery,
};
use kernel::prelude::entity::PlaceId;
use kernel::KernelError;

use crate::form::BookingForm;
use crate::transfer::GetPlaceDto;

/// Loads the place and the session user a booking widget needs.
#[async_trait::async_trait]
pub trait OpenBookingFormService:
    'static + Sync + Send + DependOnPlaceQuery + DependOnSessionQuery
{
    async fn open_booking_form(
        &self,
        dto: GetPlaceDto,
    ) -> error_stack::Result<BookingForm, KernelError> {
        let id = PlaceId::new(dto.id);
        let place = self.place_query().find_by_id(&id).await?.ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("place {} does not exist", id.as_ref()))
        })?;
        let user = self.session_query().current_user().await?;
        tracing::debug!(
            "opened booking form for {} (signed in: {})",
            id.as_ref(),
            user.is_some()
        );
        Ok(BookingForm::new(place, user))
    }
}

impl<T> OpenBookingFormService for T where T: DependOnPlaceQuery + DependOnSessionQuery {}
