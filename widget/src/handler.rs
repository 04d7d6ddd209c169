use driver::api::HttpBackend;
use driver::config::DisplayConfig;
use driver::error::ConvertError;
use kernel::interface::query::{DependOnPlaceQuery, DependOnSessionQuery};
use kernel::interface::update::DependOnBookingModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    backend: HttpBackend,
    display: DisplayConfig,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let backend = HttpBackend::from_env()?;
        let display = DisplayConfig::from_env().convert_error()?;

        Ok(Self { backend, display })
    }
}

impl DependOnPlaceQuery for AppModule {
    type PlaceQuery = HttpBackend;
    fn place_query(&self) -> &Self::PlaceQuery {
        self.backend()
    }
}

impl DependOnSessionQuery for AppModule {
    type SessionQuery = HttpBackend;
    fn session_query(&self) -> &Self::SessionQuery {
        self.backend()
    }
}

impl DependOnBookingModifier for AppModule {
    type BookingModifier = HttpBackend;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        self.backend()
    }
}
