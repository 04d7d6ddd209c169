mod booking;
mod place;

pub use self::{booking::*, place::*};
