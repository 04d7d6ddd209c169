use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ContactPhone(String);

impl ContactPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
