use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PlaceMaxGuests(u32);

impl PlaceMaxGuests {
    pub fn new(max: u32) -> Self {
        Self(max)
    }

    /// A stored maximum of zero means the listing never set one.
    pub fn bounded(max: Option<u32>) -> Option<Self> {
        max.filter(|max| *max > 0).map(Self)
    }
}
