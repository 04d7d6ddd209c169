mod account;
mod booking;
mod image;
mod listing;

pub use self::{account::*, booking::*, image::*, listing::*};
