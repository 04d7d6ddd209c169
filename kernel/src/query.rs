mod place;
mod user;

pub use self::{place::*, user::*};
