use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::{Nights, PlacePrice};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookingPrice(f64);

impl BookingPrice {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }

    pub fn of(nights: &Nights, nightly: &PlacePrice) -> Self {
        let nights: &i64 = nights.as_ref();
        let nightly: &f64 = nightly.as_ref();
        Self(*nights as f64 * nightly)
    }
}
