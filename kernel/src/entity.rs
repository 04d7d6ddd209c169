mod booking;
mod common;
mod place;
mod user;

pub use self::{booking::*, common::*, place::*, user::*};
