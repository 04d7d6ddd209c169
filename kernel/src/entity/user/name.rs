use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::ContactName;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<&UserName> for ContactName {
    fn from(value: &UserName) -> Self {
        ContactName::new(value.0.clone())
    }
}
