mod name;

pub use self::name::*;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// The signed-in user, as supplied by the session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    name: UserName,
}

impl User {
    pub fn new(name: UserName) -> Self {
        Self { name }
    }
}
