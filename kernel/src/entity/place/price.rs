use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Nightly price in the backend's currency units. Listings may carry
/// fractional prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PlacePrice(f64);

impl PlacePrice {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }
}
