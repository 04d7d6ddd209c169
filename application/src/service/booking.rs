use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::{KernelError, RejectionInspector};

use crate::form::BookingForm;
use crate::transfer::SubmittedBookingDto;

#[async_trait::async_trait]
pub trait SubmitBookingService: 'static + Sync + Send + DependOnBookingModifier {
    async fn submit_booking(
        &self,
        form: &mut BookingForm,
    ) -> error_stack::Result<SubmittedBookingDto, KernelError> {
        let booking = form.begin_submission().map_err(|report| {
            if let Some(rejection) = report.rejection() {
                tracing::warn!("booking not submitted: {rejection}");
            }
            report
        })?;

        match self.booking_modifier().create(&booking).await {
            Ok(id) => {
                tracing::info!(
                    "booked place {} as {}",
                    booking.place().as_ref(),
                    id.as_ref()
                );
                form.confirm(&id);
                Ok(SubmittedBookingDto::from(id))
            }
            Err(report) => {
                form.fail(&report);
                Err(report)
            }
        }
    }
}

impl<T> SubmitBookingService for T where T: DependOnBookingModifier {}
