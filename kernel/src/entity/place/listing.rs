use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PlaceTitle(String);

impl PlaceTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

/// Either an absolute URL or a file name relative to the uploads storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PlacePhoto(String);

impl PlacePhoto {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }
}
